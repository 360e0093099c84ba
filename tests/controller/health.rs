use axum::{http::StatusCode, response::IntoResponse};
use tea_inventory::server::controller::health::health;

use super::*;

/// Expect 200 with status "ok" and an RFC 3339 timestamp
#[tokio::test]
async fn reports_ok() {
    let resp = health().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["status"], "ok");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}
