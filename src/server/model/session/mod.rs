//! Session data models and utilities.
//!
//! [`context::SessionContext`] is the request-scoped handle controllers receive: a
//! read-only view of the session plus the explicit lifecycle operations (save, destroy,
//! regenerate, reload, touch). [`user::SessionUserId`] is the typed wrapper for the only
//! value stored in a session, the authenticated user's ID.

pub mod context;
pub mod user;
