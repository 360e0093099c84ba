pub use super::audit_log::Entity as AuditLog;
pub use super::product::Entity as Product;
pub use super::raw_material::Entity as RawMaterial;
pub use super::request::Entity as Request;
pub use super::tower_session::Entity as TowerSession;
pub use super::user::Entity as User;
