//! Helpers shared by the integration tests.

use axum::response::IntoResponse;
use tea_inventory::server::model::session::context::SessionContext;
use tea_inventory_test_utils::TestContext;

/// Session context for `test.session` with `user_id` logged in.
pub async fn logged_in(test: &TestContext, user_id: i32) -> SessionContext {
    let session = SessionContext::new(test.session.clone());
    session.set_user(user_id).await.unwrap();

    session
}

/// Session context for `test.session` with nobody logged in.
pub fn anonymous(test: &TestContext) -> SessionContext {
    SessionContext::new(test.session.clone())
}

/// Decodes a JSON response body.
pub async fn json_body(resp: impl IntoResponse) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_response().into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
