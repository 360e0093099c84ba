//! End-to-end tests through the assembled router and session layer.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::EntityTrait;
use tea_inventory::server::{
    config::SessionConfig, data::session::SeaOrmSessionStore, model::app::AppState,
    router::routes, startup::apply_session_layer,
};
use tea_inventory_test_utils::prelude::*;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionStore};

use crate::util::json_body;

fn app(test: &TestContext) -> Router {
    app_with_store(test, MemoryStore::default())
}

fn app_with_store<S>(test: &TestContext, store: S) -> Router
where
    S: SessionStore + Clone,
{
    let state: AppState = test.to_app_state();
    let config = SessionConfig {
        secure: false,
        ..Default::default()
    };

    apply_session_layer(routes().with_state(state), &config, store)
}

fn session_cookie(resp: &axum::response::Response) -> String {
    resp.headers()
        .get(header::SET_COOKIE)
        .expect("response sets a session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::get(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

fn login_request(username: &str, password: &str) -> Request<Body> {
    let body = serde_json::json!({ "username": username, "password": password });

    Request::post("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Expect the login cookie to authenticate a follow-up request
#[tokio::test]
async fn login_cookie_authenticates_later_requests() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("admin", "admin123", "ADMIN")
        .build()
        .await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(login_request("admin", "admin123"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie(&resp);
    assert!(cookie.starts_with("tea_inventory.sid="));

    let resp = app
        .oneshot(get_with_cookie("/api/auth/user", &cookie))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["username"], "admin");
    assert_eq!(body["role"], "ADMIN");

    Ok(())
}

/// Expect 401 and no session cookie for a wrong password
#[tokio::test]
async fn bad_credentials_set_no_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("admin", "admin123", "ADMIN")
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(login_request("admin", "wrong"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().get(header::SET_COOKIE).is_none());

    Ok(())
}

/// Expect protected routes to answer 401 without a cookie
#[tokio::test]
async fn protected_route_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let resp = app(&test)
        .oneshot(Request::get("/api/products").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(resp).await["error"], "Not authenticated");

    Ok(())
}

/// Expect health to answer even without any tables
#[tokio::test]
async fn health_needs_no_database_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["status"], "ok");
    assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());

    Ok(())
}

/// Expect 400 for a body that is not valid JSON
#[tokio::test]
async fn malformed_json_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("admin", "admin123", "ADMIN")
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(
            Request::post("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"username\":"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the OpenAPI document to list the inventory paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(
            Request::get("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert!(body["paths"]["/api/products"].is_object());
    assert!(body["paths"]["/api/requests/{id}/status"].is_object());

    Ok(())
}

/// Expect sessions kept in the database to authenticate until logout removes them
#[tokio::test]
async fn database_session_store_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_table(entity::prelude::TowerSession)
        .with_user("admin", "admin123", "ADMIN")
        .build()
        .await?;
    let app = app_with_store(&test, SeaOrmSessionStore::new(test.db.clone()));

    let resp = app
        .clone()
        .oneshot(login_request("admin", "admin123"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie(&resp);

    let stored = entity::prelude::TowerSession::find().all(&test.db).await?;
    assert_eq!(stored.len(), 1);
    assert!(cookie.ends_with(&stored[0].id));

    let resp = app
        .clone()
        .oneshot(get_with_cookie("/api/auth/user", &cookie))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["username"], "admin");

    let resp = app
        .clone()
        .oneshot(
            Request::post("/api/auth/logout")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let stored = entity::prelude::TowerSession::find().all(&test.db).await?;
    assert!(stored.is_empty());

    let resp = app
        .oneshot(get_with_cookie("/api/auth/user", &cookie))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
