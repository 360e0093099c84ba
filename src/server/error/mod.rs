//! Error types for the tea inventory server.
//!
//! Each domain has its own `thiserror` enum (authentication, configuration, validation)
//! which is aggregated into [`Error`]. All errors implement `IntoResponse` so handlers can
//! return `Result<_, Error>` and rely on `?` to produce the right HTTP status with an
//! [`ErrorDto`] body.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, audit::AuditEntity, constants::UnknownVariant},
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Main error type for the tea inventory server.
///
/// Domain errors carry their own response mapping; library errors (database, session
/// store, password hashing) are always reported to the client as a generic 500 while the
/// full message is logged.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization failure.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request payload failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// The addressed record does not exist.
    #[error("{0} {1} not found")]
    NotFound(AuditEntity, i32),
    /// A stored value could not be parsed, e.g. an enum tag outside its closed set.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the application.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Password hashing or verification failed.
    #[error(transparent)]
    PasswordHashError(#[from] bcrypt::BcryptError),
    /// A blocking task was cancelled or panicked.
    #[error(transparent)]
    TaskJoinError(#[from] tokio::task::JoinError),
    /// Binding or serving the listener failed.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<UnknownVariant> for Error {
    fn from(err: UnknownVariant) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationError(ValidationError::MalformedPayload(rejection.body_text()))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and malformed payloads
/// - 401 Unauthorized - Missing session or invalid credentials
/// - 403 Forbidden - Authenticated user lacks the required role
/// - 404 Not Found - Addressed record does not exist
/// - 500 Internal Server Error - Everything else (logged, not leaked)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::NotFound(entity, id) => {
                tracing::debug!(entity = %entity, id = id, "record not found");

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: format!("{} {} not found", entity_label(entity), id),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn entity_label(entity: AuditEntity) -> &'static str {
    match entity {
        AuditEntity::User => "User",
        AuditEntity::Product => "Product",
        AuditEntity::RawMaterial => "Raw material",
        AuditEntity::Request => "Request",
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The error is logged in full while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
