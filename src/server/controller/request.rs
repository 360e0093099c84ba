use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        request::{CreateRequestDto, RequestDto, RequestListParams, UpdateRequestStatusDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::context::SessionContext},
        service::request::RequestService,
    },
};

pub static REQUEST_TAG: &str = "request";

/// List requests newest first, optionally filtered by status
#[utoipa::path(
    get,
    path = "/api/requests",
    tag = REQUEST_TAG,
    params(RequestListParams),
    responses(
        (status = 200, description = "Requests", body = Vec<RequestDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_requests(
    State(state): State<AppState>,
    session: SessionContext,
    Query(params): Query<RequestListParams>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let requests = RequestService::new(&state.db).list(params.status).await?;

    Ok((StatusCode::OK, Json(requests)))
}

/// Request stock of a product or raw material
#[utoipa::path(
    post,
    path = "/api/requests",
    tag = REQUEST_TAG,
    request_body = CreateRequestDto,
    responses(
        (status = 201, description = "Request created", body = RequestDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    session: SessionContext,
    payload: Result<Json<CreateRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    let Json(request) = payload?;

    let request = RequestService::new(&state.db).create(&user, request).await?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// Approve or reject a pending request
///
/// Administrators only.
#[utoipa::path(
    put,
    path = "/api/requests/{id}/status",
    tag = REQUEST_TAG,
    params(("id" = i32, Path, description = "Request ID")),
    request_body = UpdateRequestStatusDto,
    responses(
        (status = 200, description = "Request reviewed", body = RequestDto),
        (status = 400, description = "Invalid status or request already reviewed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_request_status(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateRequestStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    let Json(review) = payload?;

    let request = RequestService::new(&state.db)
        .review(&user, id, review)
        .await?;

    Ok((StatusCode::OK, Json(request)))
}
