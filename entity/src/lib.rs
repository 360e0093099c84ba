//! SeaORM entities for the tea inventory schema.
//!
//! Enumerated columns are stored as plain string tags. The closed sets of valid
//! tags live in the application's constants module, not here.

pub mod prelude;

pub mod audit_log;
pub mod product;
pub mod raw_material;
pub mod request;
pub mod tower_session;
pub mod user;
