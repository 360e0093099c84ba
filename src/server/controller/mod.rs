//! HTTP controller endpoints for the tea inventory API.
//!
//! Handlers extract the session and payload, resolve the acting user, call into the
//! service layer and shape the response. Each handler carries a `utoipa::path`
//! annotation that feeds the OpenAPI document served under `/api/docs`.

pub mod audit;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod product;
pub mod raw_material;
pub mod request;
pub mod util;
