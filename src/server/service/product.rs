use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        audit::AuditEntity,
        constants::AuditAction,
        product::{CreateProductDto, ProductDto, UpdateProductDto},
    },
    server::{
        data::product::ProductRepository,
        error::{validation::ValidationError, Error},
        model::{auth::AuthenticatedUser, db::ProductModel},
        service::{
            audit,
            validation::{non_negative, required_text},
        },
    },
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    /// Creates a new instance of [`ProductService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<ProductDto>, Error> {
        ProductRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(ProductDto::try_from)
            .collect()
    }

    pub async fn get(&self, id: i32) -> Result<ProductDto, Error> {
        match ProductRepository::new(self.db).get_by_id(id).await? {
            Some(product) => ProductDto::try_from(product),
            None => Err(Error::NotFound(AuditEntity::Product, id)),
        }
    }

    /// Creates a product and its `CREATE` audit entry in one transaction.
    ///
    /// # Returns
    /// - `Ok(ProductDto)` - The stored product
    /// - `Err(Error::ValidationError)` - Empty name or SKU, negative stock, or SKU in use
    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        product: CreateProductDto,
    ) -> Result<ProductDto, Error> {
        let product = CreateProductDto {
            name: required_text("name", &product.name)?,
            sku: required_text("sku", &product.sku)?,
            stock_quantity: non_negative("stockQuantity", product.stock_quantity)?,
            ..product
        };

        let txn = self.db.begin().await?;
        let product_repository = ProductRepository::new(&txn);

        if product_repository.find_by_sku(&product.sku).await?.is_some() {
            return Err(ValidationError::DuplicateSku(product.sku).into());
        }

        let created = product_repository.create(&product).await?;
        audit::record(
            &txn,
            actor.id,
            AuditAction::Create,
            AuditEntity::Product,
            created.id,
            Some(serde_json::json!({ "name": created.name, "sku": created.sku })),
        )
        .await?;
        txn.commit().await?;

        tracing::info!(product_id = created.id, sku = %created.sku, "created product");

        ProductDto::try_from(created)
    }

    /// Applies the fields present in `changes` and records an `UPDATE` audit entry
    /// whose details hold those changes.
    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        id: i32,
        changes: UpdateProductDto,
    ) -> Result<ProductDto, Error> {
        let changes = UpdateProductDto {
            name: changes
                .name
                .map(|name| required_text("name", &name))
                .transpose()?,
            sku: changes
                .sku
                .map(|sku| required_text("sku", &sku))
                .transpose()?,
            stock_quantity: changes
                .stock_quantity
                .map(|stock| non_negative("stockQuantity", stock))
                .transpose()?,
            ..changes
        };

        let details =
            serde_json::to_value(&changes).map_err(|e| Error::InternalError(e.to_string()))?;

        let txn = self.db.begin().await?;
        let product_repository = ProductRepository::new(&txn);

        if let Some(sku) = &changes.sku {
            if let Some(existing) = product_repository.find_by_sku(sku).await? {
                if existing.id != id {
                    return Err(ValidationError::DuplicateSku(sku.clone()).into());
                }
            }
        }

        let Some(updated) = product_repository.update(id, &changes).await? else {
            return Err(Error::NotFound(AuditEntity::Product, id));
        };
        audit::record(
            &txn,
            actor.id,
            AuditAction::Update,
            AuditEntity::Product,
            updated.id,
            Some(details),
        )
        .await?;
        txn.commit().await?;

        tracing::info!(product_id = updated.id, "updated product");

        ProductDto::try_from(updated)
    }
}

impl TryFrom<ProductModel> for ProductDto {
    type Error = Error;

    fn try_from(product: ProductModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id,
            name: product.name,
            sku: product.sku,
            category: product.category.parse()?,
            size_format: product.size_format.parse()?,
            stock_quantity: product.stock_quantity,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}
