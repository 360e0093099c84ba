use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ExprTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::raw_material::{CreateRawMaterialDto, UpdateRawMaterialDto};

pub struct RawMaterialRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RawMaterialRepository<'a, C> {
    /// Creates a new instance of [`RawMaterialRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        material: &CreateRawMaterialDto,
    ) -> Result<entity::raw_material::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let material = entity::raw_material::ActiveModel {
            item_name: ActiveValue::Set(material.item_name.clone()),
            category: ActiveValue::Set(material.category.as_str().to_string()),
            unit: ActiveValue::Set(material.unit.as_str().to_string()),
            count: ActiveValue::Set(material.count),
            quantity_per_unit: ActiveValue::Set(material.quantity_per_unit),
            reorder_threshold: ActiveValue::Set(material.reorder_threshold),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        material.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::raw_material::Model>, DbErr> {
        entity::prelude::RawMaterial::find_by_id(id).one(self.db).await
    }

    /// All raw materials ordered by item name
    pub async fn get_all(&self) -> Result<Vec<entity::raw_material::Model>, DbErr> {
        entity::prelude::RawMaterial::find()
            .order_by_asc(entity::raw_material::Column::ItemName)
            .order_by_asc(entity::raw_material::Column::Id)
            .all(self.db)
            .await
    }

    /// Raw materials whose count is at or below their reorder threshold
    pub async fn get_low_stock(&self) -> Result<Vec<entity::raw_material::Model>, DbErr> {
        entity::prelude::RawMaterial::find()
            .filter(
                Expr::col(entity::raw_material::Column::Count)
                    .lte(Expr::col(entity::raw_material::Column::ReorderThreshold)),
            )
            .order_by_asc(entity::raw_material::Column::ItemName)
            .order_by_asc(entity::raw_material::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the fields present in `changes`
    ///
    /// Returns `Ok(None)` if no raw material with `id` exists.
    pub async fn update(
        &self,
        id: i32,
        changes: &UpdateRawMaterialDto,
    ) -> Result<Option<entity::raw_material::Model>, DbErr> {
        let Some(material) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut material_am = material.into_active_model();
        if let Some(item_name) = &changes.item_name {
            material_am.item_name = ActiveValue::Set(item_name.clone());
        }
        if let Some(category) = changes.category {
            material_am.category = ActiveValue::Set(category.as_str().to_string());
        }
        if let Some(unit) = changes.unit {
            material_am.unit = ActiveValue::Set(unit.as_str().to_string());
        }
        if let Some(count) = changes.count {
            material_am.count = ActiveValue::Set(count);
        }
        if let Some(quantity_per_unit) = changes.quantity_per_unit {
            material_am.quantity_per_unit = ActiveValue::Set(quantity_per_unit);
        }
        if let Some(reorder_threshold) = changes.reorder_threshold {
            material_am.reorder_threshold = ActiveValue::Set(reorder_threshold);
        }
        material_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let material = material_am.update(self.db).await?;

        Ok(Some(material))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::RawMaterial::find().count(self.db).await
    }

    pub async fn count_low_stock(&self) -> Result<u64, DbErr> {
        entity::prelude::RawMaterial::find()
            .filter(
                Expr::col(entity::raw_material::Column::Count)
                    .lte(Expr::col(entity::raw_material::Column::ReorderThreshold)),
            )
            .count(self.db)
            .await
    }
}
