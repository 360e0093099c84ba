use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, constants::RequestStatus};

/// Payload rejected before anything is written.
///
/// The display text is returned to the client verbatim, so it names the offending
/// field using its API (camelCase) spelling.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("{0} must not be negative")]
    Negative(&'static str),
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
    #[error("A request must reference exactly one of productId or rawMaterialId")]
    InvalidRequestTarget,
    #[error("{field} {id} does not exist")]
    UnknownReference { field: &'static str, id: i32 },
    #[error("A product with SKU {0:?} already exists")]
    DuplicateSku(String),
    #[error("Request {0} has already been reviewed")]
    AlreadyReviewed(i32),
    #[error("Request status cannot be set to {0}")]
    InvalidStatusTransition(RequestStatus),
    #[error("Malformed request body: {0}")]
    MalformedPayload(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
