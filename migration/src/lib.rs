pub use sea_orm_migration::prelude::*;

mod m20250301_000001_user;
mod m20250301_000002_product;
mod m20250301_000003_raw_material;
mod m20250301_000004_request;
mod m20250301_000005_audit_log;
mod m20250301_000006_tower_sessions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_user::Migration),
            Box::new(m20250301_000002_product::Migration),
            Box::new(m20250301_000003_raw_material::Migration),
            Box::new(m20250301_000004_request::Migration),
            Box::new(m20250301_000005_audit_log::Migration),
            Box::new(m20250301_000006_tower_sessions::Migration),
        ]
    }
}
