//! Tests for the product endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tea_inventory::{
    model::{
        audit::AuditEntity,
        constants::{AuditAction, ProductCategory, SizeFormat},
        product::{CreateProductDto, UpdateProductDto},
    },
    server::{
        controller::product::{create_product, get_product, list_products, update_product},
        service::audit::AuditService,
    },
};

use super::*;

fn oolong() -> CreateProductDto {
    CreateProductDto {
        name: "Tieguanyin".to_string(),
        sku: "OT-010".to_string(),
        category: ProductCategory::OolongTea,
        size_format: SizeFormat::Tin,
        stock_quantity: 6,
    }
}

/// Expect 200 with products ordered by name
#[tokio::test]
async fn lists_products() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("clerk", "password", "STAFF")
        .with_product("Sencha", "GT-001")
        .with_product("Assam", "BT-001")
        .build()
        .await?;
    let session = logged_in(&test, 1).await;

    let result = list_products(State(test.to_app_state()), session).await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap()).await;
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Assam", "Sencha"]);

    Ok(())
}

/// Expect 401 when listing without a session user
#[tokio::test]
async fn list_requires_authentication() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = list_products(State(test.to_app_state()), anonymous(&test)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 201 with the product and one CREATE entry referencing the actor
#[tokio::test]
async fn creates_product() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("clerk", "password", "STAFF")
        .build()
        .await?;
    let session = logged_in(&test, 1).await;

    let result = create_product(State(test.to_app_state()), session, Ok(Json(oolong()))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["sku"], "OT-010");
    assert_eq!(body["category"], "OOLONG_TEA");
    assert_eq!(body["sizeFormat"], "TIN");

    let product_id = body["id"].as_i64().unwrap() as i32;
    let entries = AuditService::new(&test.db)
        .list_for_entity(AuditEntity::Product, product_id)
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, AuditAction::Create);
    assert_eq!(entries[0].user_id, 1);

    Ok(())
}

/// Expect 400 for a blank name
#[tokio::test]
async fn create_rejects_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("clerk", "password", "STAFF")
        .build()
        .await?;
    let session = logged_in(&test, 1).await;
    let product = CreateProductDto {
        name: "   ".to_string(),
        ..oolong()
    };

    let result = create_product(State(test.to_app_state()), session, Ok(Json(product))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["error"], "name must not be empty");

    Ok(())
}

/// Expect 200 for an existing product and 404 for a missing one
#[tokio::test]
async fn gets_product_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("clerk", "password", "STAFF")
        .with_product("Assam", "BT-001")
        .build()
        .await?;

    let found = get_product(
        State(test.to_app_state()),
        logged_in(&test, 1).await,
        Path(1),
    )
    .await;
    let missing = get_product(
        State(test.to_app_state()),
        logged_in(&test, 1).await,
        Path(99),
    )
    .await;

    assert!(found.is_ok());
    assert_eq!(found.unwrap().into_response().status(), StatusCode::OK);
    assert!(missing.is_err());
    let resp = missing.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "Product 99 not found");

    Ok(())
}

/// Expect 200 with the new stock and one UPDATE entry
#[tokio::test]
async fn updates_product() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("clerk", "password", "STAFF")
        .with_product("Assam", "BT-001")
        .build()
        .await?;
    let changes = UpdateProductDto {
        stock_quantity: Some(18),
        ..Default::default()
    };

    let result = update_product(
        State(test.to_app_state()),
        logged_in(&test, 1).await,
        Path(1),
        Ok(Json(changes)),
    )
    .await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap()).await;
    assert_eq!(body["stockQuantity"], 18);
    let entries = AuditService::new(&test.db)
        .list_for_entity(AuditEntity::Product, 1)
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, AuditAction::Update);

    Ok(())
}
