use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, dashboard::DashboardStatsDto},
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::context::SessionContext},
        service::dashboard::DashboardService,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Inventory totals for the dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStatsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: SessionContext,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let stats = DashboardService::new(&state.db).stats().await?;

    Ok((StatusCode::OK, Json(stats)))
}
