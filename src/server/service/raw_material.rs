use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        audit::AuditEntity,
        constants::AuditAction,
        raw_material::{CreateRawMaterialDto, RawMaterialDto, UpdateRawMaterialDto},
    },
    server::{
        data::raw_material::RawMaterialRepository,
        error::Error,
        model::{auth::AuthenticatedUser, db::RawMaterialModel},
        service::{
            audit,
            validation::{non_negative, non_negative_decimal, required_text},
        },
    },
};

pub struct RawMaterialService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RawMaterialService<'a> {
    /// Creates a new instance of [`RawMaterialService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<RawMaterialDto>, Error> {
        RawMaterialRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(RawMaterialDto::try_from)
            .collect()
    }

    /// Materials whose count has reached their reorder threshold.
    pub async fn list_low_stock(&self) -> Result<Vec<RawMaterialDto>, Error> {
        RawMaterialRepository::new(self.db)
            .get_low_stock()
            .await?
            .into_iter()
            .map(RawMaterialDto::try_from)
            .collect()
    }

    pub async fn get(&self, id: i32) -> Result<RawMaterialDto, Error> {
        match RawMaterialRepository::new(self.db).get_by_id(id).await? {
            Some(material) => RawMaterialDto::try_from(material),
            None => Err(Error::NotFound(AuditEntity::RawMaterial, id)),
        }
    }

    /// Creates a raw material and its `CREATE` audit entry in one transaction.
    ///
    /// Nothing is written when validation fails.
    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        material: CreateRawMaterialDto,
    ) -> Result<RawMaterialDto, Error> {
        let material = CreateRawMaterialDto {
            item_name: required_text("itemName", &material.item_name)?,
            count: non_negative("count", material.count)?,
            quantity_per_unit: non_negative_decimal(
                "quantityPerUnit",
                material.quantity_per_unit,
            )?,
            reorder_threshold: non_negative("reorderThreshold", material.reorder_threshold)?,
            ..material
        };

        let txn = self.db.begin().await?;

        let created = RawMaterialRepository::new(&txn).create(&material).await?;
        audit::record(
            &txn,
            actor.id,
            AuditAction::Create,
            AuditEntity::RawMaterial,
            created.id,
            Some(serde_json::json!({ "itemName": created.item_name, "count": created.count })),
        )
        .await?;
        txn.commit().await?;

        tracing::info!(raw_material_id = created.id, "created raw material");

        RawMaterialDto::try_from(created)
    }

    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        id: i32,
        changes: UpdateRawMaterialDto,
    ) -> Result<RawMaterialDto, Error> {
        let changes = UpdateRawMaterialDto {
            item_name: changes
                .item_name
                .map(|name| required_text("itemName", &name))
                .transpose()?,
            count: changes
                .count
                .map(|count| non_negative("count", count))
                .transpose()?,
            quantity_per_unit: changes
                .quantity_per_unit
                .map(|quantity| non_negative_decimal("quantityPerUnit", quantity))
                .transpose()?,
            reorder_threshold: changes
                .reorder_threshold
                .map(|threshold| non_negative("reorderThreshold", threshold))
                .transpose()?,
            ..changes
        };
        let details =
            serde_json::to_value(&changes).map_err(|e| Error::InternalError(e.to_string()))?;

        let txn = self.db.begin().await?;

        let Some(updated) = RawMaterialRepository::new(&txn).update(id, &changes).await? else {
            return Err(Error::NotFound(AuditEntity::RawMaterial, id));
        };
        audit::record(
            &txn,
            actor.id,
            AuditAction::Update,
            AuditEntity::RawMaterial,
            updated.id,
            Some(details),
        )
        .await?;
        txn.commit().await?;

        tracing::info!(raw_material_id = updated.id, "updated raw material");

        RawMaterialDto::try_from(updated)
    }
}

impl TryFrom<RawMaterialModel> for RawMaterialDto {
    type Error = Error;

    fn try_from(material: RawMaterialModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: material.id,
            low_stock: material.count <= material.reorder_threshold,
            item_name: material.item_name,
            category: material.category.parse()?,
            unit: material.unit.parse()?,
            count: material.count,
            quantity_per_unit: material.quantity_per_unit,
            reorder_threshold: material.reorder_threshold,
            created_at: material.created_at,
            updated_at: material.updated_at,
        })
    }
}
