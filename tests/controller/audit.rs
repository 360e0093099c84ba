//! Tests for the audit log endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tea_inventory::{
    model::{
        audit::{AuditEntity, AuditListParams},
        constants::AuditAction,
    },
    server::{controller::audit::list_audit_logs, service::audit},
};

use super::*;

/// Expect admins to receive entries newest first
#[tokio::test]
async fn admin_lists_entries_newest_first() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("admin", "admin123", "ADMIN")
        .build()
        .await?;
    audit::record(&test.db, 1, AuditAction::Create, AuditEntity::Product, 1, None)
        .await
        .unwrap();
    audit::record(&test.db, 1, AuditAction::Update, AuditEntity::Product, 1, None)
        .await
        .unwrap();

    let result = list_audit_logs(
        State(test.to_app_state()),
        logged_in(&test, 1).await,
        Query(AuditListParams::default()),
    )
    .await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap()).await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["action"], "UPDATE");
    assert_eq!(entries[1]["action"], "CREATE");

    Ok(())
}

/// Expect the limit parameter to cap the number of entries
#[tokio::test]
async fn honours_limit() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("admin", "admin123", "ADMIN")
        .build()
        .await?;
    for id in 1..=3 {
        audit::record(&test.db, 1, AuditAction::Create, AuditEntity::Product, id, None)
            .await
            .unwrap();
    }

    let result = list_audit_logs(
        State(test.to_app_state()),
        logged_in(&test, 1).await,
        Query(AuditListParams { limit: Some(2) }),
    )
    .await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap()).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    Ok(())
}

/// Expect 403 for staff users
#[tokio::test]
async fn staff_is_forbidden() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("clerk", "password", "STAFF")
        .build()
        .await?;

    let result = list_audit_logs(
        State(test.to_app_state()),
        logged_in(&test, 1).await,
        Query(AuditListParams::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
