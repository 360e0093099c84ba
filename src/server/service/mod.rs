//! Service layer for business logic.
//!
//! Services validate input, coordinate repositories inside a transaction and write the
//! audit entry describing each change. Controllers only translate between HTTP and
//! these services.

pub mod audit;
pub mod auth;
pub mod dashboard;
pub mod product;
pub mod raw_material;
pub mod request;
pub mod validation;
