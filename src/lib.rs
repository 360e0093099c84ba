//! Tea inventory backend.
//!
//! An axum application serving a session authenticated CRUD API over products, raw
//! materials, stock requests and their audit trail, plus the `tooling` helpers used by the
//! `fix-imports` binary.

pub mod model;
pub mod server;
pub mod tooling;
