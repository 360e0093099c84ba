use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        audit::{AuditEntryDto, AuditListParams},
        constants::Role,
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::context::SessionContext},
        service::audit::AuditService,
    },
};

pub static AUDIT_TAG: &str = "audit";

/// List recent audit entries, newest first
///
/// Administrators only.
#[utoipa::path(
    get,
    path = "/api/audit-logs",
    tag = AUDIT_TAG,
    params(AuditListParams),
    responses(
        (status = 200, description = "Audit entries", body = Vec<AuditEntryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_audit_logs(
    State(state): State<AppState>,
    session: SessionContext,
    Query(params): Query<AuditListParams>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    user.require_role(Role::Admin)?;

    let entries = AuditService::new(&state.db).list_recent(params.limit).await?;

    Ok((StatusCode::OK, Json(entries)))
}
