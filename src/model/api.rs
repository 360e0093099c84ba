use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Liveness payload returned by the health endpoint
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Plain acknowledgement for operations without a resource to return
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct MessageDto {
    pub message: String,
}
