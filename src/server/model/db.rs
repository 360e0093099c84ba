//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate. Enumerated columns on these
//! models are raw string tags; convert them through `model::constants` before use.

/// User account row (`username`, bcrypt `password_hash`, `role` tag).
pub type UserModel = entity::user::Model;

/// Finished product row (`sku` is unique, `stock_quantity` is never negative).
pub type ProductModel = entity::product::Model;

/// Raw material row. Low stock when `count <= reorder_threshold`.
pub type RawMaterialModel = entity::raw_material::Model;

/// Stock request row referencing exactly one of a product or a raw material.
pub type RequestModel = entity::request::Model;

/// Append-only audit log row.
pub type AuditLogModel = entity::audit_log::Model;

/// Persisted session record used by the session store.
pub type TowerSessionModel = entity::tower_session::Model;
