//! Database fixtures used while a test runs.
//!
//! - `user` - accounts with bcrypt-hashed passwords
//! - `inventory` - products, raw materials and requests

pub mod inventory;
pub mod user;
