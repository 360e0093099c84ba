use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        product::{CreateProductDto, ProductDto, UpdateProductDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::context::SessionContext},
        service::product::ProductService,
    },
};

pub static PRODUCT_TAG: &str = "product";

/// List all products ordered by name
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "All products", body = Vec<ProductDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_products(
    State(state): State<AppState>,
    session: SessionContext,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let products = ProductService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(products)))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    session: SessionContext,
    payload: Result<Json<CreateProductDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    let Json(product) = payload?;

    let product = ProductService::new(&state.db).create(&user, product).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let product = ProductService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(product)))
}

/// Update the given fields of a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateProductDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    let Json(changes) = payload?;

    let product = ProductService::new(&state.db)
        .update(&user, id, changes)
        .await?;

    Ok((StatusCode::OK, Json(product)))
}
