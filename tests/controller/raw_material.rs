//! Tests for the raw material endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tea_inventory::{
    model::{
        constants::{MaterialCategory, MaterialUnit},
        raw_material::{CreateRawMaterialDto, UpdateRawMaterialDto},
    },
    server::{
        controller::raw_material::{
            create_raw_material, get_raw_material, list_low_stock, list_raw_materials,
            update_raw_material,
        },
        service::audit::AuditService,
    },
};

use super::*;

fn labels(count: i32) -> CreateRawMaterialDto {
    CreateRawMaterialDto {
        item_name: "Tin labels".to_string(),
        category: MaterialCategory::Label,
        count,
        unit: MaterialUnit::Roll,
        quantity_per_unit: 500.0,
        reorder_threshold: 2,
    }
}

/// Expect every listed material to have non-negative count and threshold
#[tokio::test]
async fn lists_materials_with_non_negative_counts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("clerk", "password", "STAFF")
        .with_raw_material("Tins", 5, 10)
        .with_raw_material("Jasmine", 50, 10)
        .build()
        .await?;

    let result = list_raw_materials(State(test.to_app_state()), logged_in(&test, 1).await).await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap()).await;
    let materials = body.as_array().unwrap();
    assert_eq!(materials.len(), 2);
    for material in materials {
        assert!(material["count"].as_i64().unwrap() >= 0);
        assert!(material["reorderThreshold"].as_i64().unwrap() >= 0);
    }

    Ok(())
}

/// Expect an empty list for an empty table
#[tokio::test]
async fn lists_empty_table() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("clerk", "password", "STAFF")
        .build()
        .await?;

    let result = list_raw_materials(State(test.to_app_state()), logged_in(&test, 1).await).await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap()).await;
    assert_eq!(body, serde_json::json!([]));

    Ok(())
}

/// Expect 201 with the low-stock flag computed from count and threshold
#[tokio::test]
async fn creates_material() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("clerk", "password", "STAFF")
        .build()
        .await?;

    let result = create_raw_material(
        State(test.to_app_state()),
        logged_in(&test, 1).await,
        Ok(Json(labels(2))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["itemName"], "Tin labels");
    assert_eq!(body["unit"], "ROLL");
    assert_eq!(body["lowStock"], true);

    Ok(())
}

/// Expect 400, no stored material and no audit entry for a negative count
#[tokio::test]
async fn create_rejects_negative_count() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("clerk", "password", "STAFF")
        .build()
        .await?;

    let result = create_raw_material(
        State(test.to_app_state()),
        logged_in(&test, 1).await,
        Ok(Json(labels(-5))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["error"], "count must not be negative");

    let listed = list_raw_materials(State(test.to_app_state()), logged_in(&test, 1).await).await;
    assert_eq!(json_body(listed.unwrap()).await, serde_json::json!([]));
    let entries = AuditService::new(&test.db).list_recent(None).await.unwrap();
    assert!(entries.is_empty());

    Ok(())
}

/// Expect only materials at or below their threshold
#[tokio::test]
async fn lists_low_stock() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("clerk", "password", "STAFF")
        .with_raw_material("Tins", 5, 10)
        .with_raw_material("Jasmine", 50, 10)
        .build()
        .await?;

    let result = list_low_stock(State(test.to_app_state()), logged_in(&test, 1).await).await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap()).await;
    let materials = body.as_array().unwrap();
    assert_eq!(materials.len(), 1);
    assert_eq!(materials[0]["itemName"], "Tins");

    Ok(())
}

/// Expect 404 for a missing material
#[tokio::test]
async fn get_fails_for_missing_material() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("clerk", "password", "STAFF")
        .build()
        .await?;

    let result = get_raw_material(
        State(test.to_app_state()),
        logged_in(&test, 1).await,
        Path(3),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "Raw material 3 not found");

    Ok(())
}

/// Expect 200 with the new count and exactly one audit entry
#[tokio::test]
async fn updates_material() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("clerk", "password", "STAFF")
        .with_raw_material("Tins", 5, 10)
        .build()
        .await?;
    let changes = UpdateRawMaterialDto {
        count: Some(30),
        ..Default::default()
    };

    let result = update_raw_material(
        State(test.to_app_state()),
        logged_in(&test, 1).await,
        Path(1),
        Ok(Json(changes)),
    )
    .await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap()).await;
    assert_eq!(body["count"], 30);
    assert_eq!(body["lowStock"], false);
    let entries = AuditService::new(&test.db).list_recent(None).await.unwrap();
    assert_eq!(entries.len(), 1);

    Ok(())
}
