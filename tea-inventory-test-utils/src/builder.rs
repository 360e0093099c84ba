//! Declarative test builder.
//!
//! Configuration methods only queue work; tables and fixtures are created in `build()`.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Chain table and fixture methods, then call `build()` to get a [`TestContext`].
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_inventory_tables()
///     .with_user("clerk", "password", "STAFF")
///     .with_product("Assam", "BT-001")
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_inventory_tables: bool,

    // (username, password, role tag)
    users: Vec<(String, String, String)>,
    // (name, sku)
    products: Vec<(String, String)>,
    // (item name, count, reorder threshold)
    raw_materials: Vec<(String, i32, i32)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_inventory_tables: false,
            users: Vec::new(),
            products: Vec::new(),
            raw_materials: Vec::new(),
        }
    }

    /// Add the user, product, raw material, request and audit log tables.
    pub fn with_inventory_tables(mut self) -> Self {
        self.include_inventory_tables = true;
        self
    }

    /// Add a table generated from `entity`.
    ///
    /// Tables are created after the inventory tables, in the order added.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user whose password is hashed with bcrypt.
    ///
    /// Requires the inventory tables.
    pub fn with_user(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        self.users
            .push((username.into(), password.into(), role.into()));
        self
    }

    /// Insert a product with zero stock.
    ///
    /// Requires the inventory tables.
    pub fn with_product(mut self, name: impl Into<String>, sku: impl Into<String>) -> Self {
        self.products.push((name.into(), sku.into()));
        self
    }

    /// Insert a raw material with the given count and reorder threshold.
    ///
    /// Requires the inventory tables.
    pub fn with_raw_material(
        mut self,
        item_name: impl Into<String>,
        count: i32,
        reorder_threshold: i32,
    ) -> Self {
        self.raw_materials
            .push((item_name.into(), count, reorder_threshold));
        self
    }

    /// Create the configured tables, then insert fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::PasswordHashError)` - Hashing a fixture password failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_inventory_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Product),
                schema.create_table_from_entity(entity::prelude::RawMaterial),
                schema.create_table_from_entity(entity::prelude::Request),
                schema.create_table_from_entity(entity::prelude::AuditLog),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for (username, password, role) in self.users {
            setup.user().insert_user(&username, &password, &role).await?;
        }

        for (name, sku) in self.products {
            setup.inventory().insert_product(&name, &sku).await?;
        }

        for (item_name, count, reorder_threshold) in self.raw_materials {
            setup
                .inventory()
                .insert_raw_material(&item_name, count, reorder_threshold)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
