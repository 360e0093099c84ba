//! Data access layer repositories.
//!
//! Each repository wraps a borrowed `ConnectionTrait` so the same code runs against the
//! pooled connection or inside a transaction. Repositories speak in database models and
//! raw string tags; conversion to API types happens in the service layer.

pub mod audit_log;
pub mod product;
pub mod raw_material;
pub mod request;
pub mod session;
pub mod user;
