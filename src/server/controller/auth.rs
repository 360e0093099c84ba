use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, LoginResponseDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::context::SessionContext},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Log in with username and password
///
/// On success the session identifier is regenerated and bound to the user, so any
/// identifier the client held before logging in stops being valid.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: SessionContext,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(credentials) = payload?;

    let auth_service = AuthService::new(&state.db);
    let user = auth_service
        .login(&credentials.username, &credentials.password)
        .await?;

    session.set_user(user.id).await?;
    session.regenerate().await?;

    auth_service.record_login(user.id).await?;

    Ok((StatusCode::OK, Json(LoginResponseDto { user })))
}

/// Log out and destroy the session
///
/// Succeeds whether or not a user was logged in.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: SessionContext,
) -> Result<impl IntoResponse, Error> {
    let user_id = session.user_id().await?;

    session.destroy().await?;

    if let Some(user_id) = user_id {
        AuthService::new(&state.db).logout(user_id).await?;
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

/// Get the logged in user
///
/// Extends the session's inactivity expiry.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: SessionContext,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    session.touch().await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}
