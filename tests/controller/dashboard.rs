//! Tests for the dashboard endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tea_inventory::server::controller::dashboard::get_stats;

use super::*;

/// Expect counts across every inventory table
#[tokio::test]
async fn returns_counts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("clerk", "password", "STAFF")
        .with_product("Assam", "BT-001")
        .with_raw_material("Tins", 5, 10)
        .with_raw_material("Jasmine", 50, 10)
        .build()
        .await?;
    test.inventory()
        .insert_request(1, Some(1), None, "PENDING")
        .await?;
    test.inventory()
        .insert_request(1, None, Some(2), "APPROVED")
        .await?;

    let result = get_stats(State(test.to_app_state()), logged_in(&test, 1).await).await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap()).await;
    assert_eq!(body["totalProducts"], 1);
    assert_eq!(body["totalRawMaterials"], 2);
    assert_eq!(body["totalRequests"], 2);
    assert_eq!(body["pendingRequests"], 1);
    assert_eq!(body["lowStockCount"], 1);

    Ok(())
}

/// Expect 401 without a session user
#[tokio::test]
async fn requires_authentication() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = get_stats(State(test.to_app_state()), anonymous(&test)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
