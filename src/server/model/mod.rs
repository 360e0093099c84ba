//! Server application models and type definitions.
//!
//! Application state, database model type aliases, the authenticated user resolved from
//! a session, and the typed wrappers around session data.

pub mod app;
pub mod auth;
pub mod db;
pub mod session;
