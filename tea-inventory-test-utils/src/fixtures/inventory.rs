use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{
        TEST_MATERIAL_CATEGORY, TEST_MATERIAL_UNIT, TEST_PRODUCT_CATEGORY,
        TEST_PRODUCT_SIZE_FORMAT,
    },
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn inventory<'a>(&'a self) -> InventoryFixtures<'a> {
        InventoryFixtures { setup: self }
    }
}

pub struct InventoryFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> InventoryFixtures<'a> {
    pub async fn insert_product(
        &self,
        name: &str,
        sku: &str,
    ) -> Result<entity::product::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Product::insert(entity::product::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            sku: ActiveValue::Set(sku.to_string()),
            category: ActiveValue::Set(TEST_PRODUCT_CATEGORY.to_string()),
            size_format: ActiveValue::Set(TEST_PRODUCT_SIZE_FORMAT.to_string()),
            stock_quantity: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_raw_material(
        &self,
        item_name: &str,
        count: i32,
        reorder_threshold: i32,
    ) -> Result<entity::raw_material::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::RawMaterial::insert(entity::raw_material::ActiveModel {
                item_name: ActiveValue::Set(item_name.to_string()),
                category: ActiveValue::Set(TEST_MATERIAL_CATEGORY.to_string()),
                unit: ActiveValue::Set(TEST_MATERIAL_UNIT.to_string()),
                count: ActiveValue::Set(count),
                quantity_per_unit: ActiveValue::Set(1.0),
                reorder_threshold: ActiveValue::Set(reorder_threshold),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a request with an explicit status tag.
    pub async fn insert_request(
        &self,
        requester_id: i32,
        product_id: Option<i32>,
        raw_material_id: Option<i32>,
        status: &str,
    ) -> Result<entity::request::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Request::insert(entity::request::ActiveModel {
            requester_id: ActiveValue::Set(requester_id),
            product_id: ActiveValue::Set(product_id),
            raw_material_id: ActiveValue::Set(raw_material_id),
            quantity: ActiveValue::Set(1),
            status: ActiveValue::Set(status.to_string()),
            notes: ActiveValue::Set(None),
            reviewed_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
