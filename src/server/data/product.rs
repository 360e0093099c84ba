use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::product::{CreateProductDto, UpdateProductDto};

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new instance of [`ProductRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        product: &CreateProductDto,
    ) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let product = entity::product::ActiveModel {
            name: ActiveValue::Set(product.name.clone()),
            sku: ActiveValue::Set(product.sku.clone()),
            category: ActiveValue::Set(product.category.as_str().to_string()),
            size_format: ActiveValue::Set(product.size_format.as_str().to_string()),
            stock_quantity: ActiveValue::Set(product.stock_quantity),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        product.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_sku(&self, sku: &str) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::Sku.eq(sku))
            .one(self.db)
            .await
    }

    /// All products ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::Name)
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the fields present in `changes`
    ///
    /// Returns `Ok(None)` if no product with `id` exists.
    pub async fn update(
        &self,
        id: i32,
        changes: &UpdateProductDto,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        let Some(product) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut product_am = product.into_active_model();
        if let Some(name) = &changes.name {
            product_am.name = ActiveValue::Set(name.clone());
        }
        if let Some(sku) = &changes.sku {
            product_am.sku = ActiveValue::Set(sku.clone());
        }
        if let Some(category) = changes.category {
            product_am.category = ActiveValue::Set(category.as_str().to_string());
        }
        if let Some(size_format) = changes.size_format {
            product_am.size_format = ActiveValue::Set(size_format.as_str().to_string());
        }
        if let Some(stock_quantity) = changes.stock_quantity {
            product_am.stock_quantity = ActiveValue::Set(stock_quantity);
        }
        product_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let product = product_am.update(self.db).await?;

        Ok(Some(product))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Product::find().count(self.db).await
    }
}
