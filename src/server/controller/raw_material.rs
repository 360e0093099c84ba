use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        raw_material::{CreateRawMaterialDto, RawMaterialDto, UpdateRawMaterialDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::context::SessionContext},
        service::raw_material::RawMaterialService,
    },
};

pub static RAW_MATERIAL_TAG: &str = "raw_material";

/// List all raw materials ordered by item name
#[utoipa::path(
    get,
    path = "/api/raw-materials",
    tag = RAW_MATERIAL_TAG,
    responses(
        (status = 200, description = "All raw materials", body = Vec<RawMaterialDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_raw_materials(
    State(state): State<AppState>,
    session: SessionContext,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let materials = RawMaterialService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(materials)))
}

/// List raw materials at or below their reorder threshold
#[utoipa::path(
    get,
    path = "/api/raw-materials/low-stock",
    tag = RAW_MATERIAL_TAG,
    responses(
        (status = 200, description = "Low-stock raw materials", body = Vec<RawMaterialDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_low_stock(
    State(state): State<AppState>,
    session: SessionContext,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let materials = RawMaterialService::new(&state.db).list_low_stock().await?;

    Ok((StatusCode::OK, Json(materials)))
}

/// Create a raw material
#[utoipa::path(
    post,
    path = "/api/raw-materials",
    tag = RAW_MATERIAL_TAG,
    request_body = CreateRawMaterialDto,
    responses(
        (status = 201, description = "Raw material created", body = RawMaterialDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_raw_material(
    State(state): State<AppState>,
    session: SessionContext,
    payload: Result<Json<CreateRawMaterialDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    let Json(material) = payload?;

    let material = RawMaterialService::new(&state.db).create(&user, material).await?;

    Ok((StatusCode::CREATED, Json(material)))
}

/// Get a raw material by ID
#[utoipa::path(
    get,
    path = "/api/raw-materials/{id}",
    tag = RAW_MATERIAL_TAG,
    params(("id" = i32, Path, description = "Raw material ID")),
    responses(
        (status = 200, description = "Raw material found", body = RawMaterialDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Raw material not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_raw_material(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let material = RawMaterialService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(material)))
}

/// Update the given fields of a raw material
#[utoipa::path(
    put,
    path = "/api/raw-materials/{id}",
    tag = RAW_MATERIAL_TAG,
    params(("id" = i32, Path, description = "Raw material ID")),
    request_body = UpdateRawMaterialDto,
    responses(
        (status = 200, description = "Raw material updated", body = RawMaterialDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Raw material not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_raw_material(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateRawMaterialDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    let Json(changes) = payload?;

    let material = RawMaterialService::new(&state.db)
        .update(&user, id, changes)
        .await?;

    Ok((StatusCode::OK, Json(material)))
}
