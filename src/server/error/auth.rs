use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, constants::Role};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("User ID {user_id:?} requires role {required} for this operation")]
    Forbidden { user_id: i32, required: Role },
}

impl AuthError {
    fn unauthenticated(message: &str) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                Self::unauthenticated("Invalid username or password")
            }
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::unauthenticated("Not authenticated")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Self::unauthenticated("Not authenticated")
            }
            Self::Forbidden { user_id, required } => {
                tracing::debug!(user_id = %user_id, required = %required, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Insufficient permissions".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
