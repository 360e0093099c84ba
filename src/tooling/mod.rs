//! Developer tooling shipped alongside the server.

pub mod import_fix;
