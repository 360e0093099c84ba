//! Server application core modules.
//!
//! HTTP routing and controllers, the service layer with its validation and audit
//! recording, sea-orm repositories, the database backed session store, configuration
//! and startup wiring.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
