//! Tests for the stock request endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tea_inventory::{
    model::{
        audit::AuditEntity,
        constants::{AuditAction, RequestStatus},
        request::{CreateRequestDto, RequestListParams, UpdateRequestStatusDto},
    },
    server::{
        controller::request::{create_request, list_requests, update_request_status},
        service::audit::AuditService,
    },
};

use super::*;

fn review(status: RequestStatus) -> UpdateRequestStatusDto {
    UpdateRequestStatusDto {
        status,
        notes: None,
    }
}

mod list_requests {
    use super::*;

    /// Expect only pending requests when filtering by PENDING
    #[tokio::test]
    async fn filters_by_status() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_user("clerk", "password", "STAFF")
            .with_product("Assam", "BT-001")
            .build()
            .await?;
        test.inventory()
            .insert_request(1, Some(1), None, "PENDING")
            .await?;
        test.inventory()
            .insert_request(1, Some(1), None, "APPROVED")
            .await?;
        let params = RequestListParams {
            status: Some(RequestStatus::Pending),
        };

        let result = list_requests(
            State(test.to_app_state()),
            logged_in(&test, 1).await,
            Query(params),
        )
        .await;

        assert!(result.is_ok());
        let body = json_body(result.unwrap()).await;
        let requests = body.as_array().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0]["status"], "PENDING");

        Ok(())
    }

    /// Expect every request without a filter
    #[tokio::test]
    async fn lists_all_without_filter() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_user("clerk", "password", "STAFF")
            .with_raw_material("Tins", 5, 10)
            .build()
            .await?;
        test.inventory()
            .insert_request(1, None, Some(1), "PENDING")
            .await?;
        test.inventory()
            .insert_request(1, None, Some(1), "REJECTED")
            .await?;

        let result = list_requests(
            State(test.to_app_state()),
            logged_in(&test, 1).await,
            Query(RequestListParams::default()),
        )
        .await;

        assert!(result.is_ok());
        let body = json_body(result.unwrap()).await;
        assert_eq!(body.as_array().unwrap().len(), 2);

        Ok(())
    }
}

mod create_request {
    use super::*;

    /// Expect 201 with a PENDING request owned by the session user
    #[tokio::test]
    async fn creates_pending_request() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_user("clerk", "password", "STAFF")
            .with_product("Assam", "BT-001")
            .build()
            .await?;
        let request = CreateRequestDto {
            product_id: Some(1),
            raw_material_id: None,
            quantity: 12,
            notes: Some("  for the spring market  ".to_string()),
        };

        let result = create_request(
            State(test.to_app_state()),
            logged_in(&test, 1).await,
            Ok(Json(request)),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = json_body(resp).await;
        assert_eq!(body["status"], "PENDING");
        assert_eq!(body["requesterId"], 1);
        assert_eq!(body["quantity"], 12);
        assert_eq!(body["notes"], "for the spring market");

        Ok(())
    }

    /// Expect 400 when the request names no target
    #[tokio::test]
    async fn rejects_missing_target() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_user("clerk", "password", "STAFF")
            .build()
            .await?;
        let request = CreateRequestDto {
            product_id: None,
            raw_material_id: None,
            quantity: 1,
            notes: None,
        };

        let result = create_request(
            State(test.to_app_state()),
            logged_in(&test, 1).await,
            Ok(Json(request)),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 400 for a zero quantity
    #[tokio::test]
    async fn rejects_zero_quantity() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_user("clerk", "password", "STAFF")
            .with_product("Assam", "BT-001")
            .build()
            .await?;
        let request = CreateRequestDto {
            product_id: Some(1),
            raw_material_id: None,
            quantity: 0,
            notes: None,
        };

        let result = create_request(
            State(test.to_app_state()),
            logged_in(&test, 1).await,
            Ok(Json(request)),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(resp).await["error"],
            "quantity must be greater than zero"
        );

        Ok(())
    }
}

mod update_request_status {
    use super::*;

    /// Expect 200, the reviewer recorded and an APPROVE audit entry
    #[tokio::test]
    async fn admin_approves_pending_request() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_user("clerk", "password", "STAFF")
            .with_user("admin", "admin123", "ADMIN")
            .with_product("Assam", "BT-001")
            .build()
            .await?;
        test.inventory()
            .insert_request(1, Some(1), None, "PENDING")
            .await?;

        let result = update_request_status(
            State(test.to_app_state()),
            logged_in(&test, 2).await,
            Path(1),
            Ok(Json(review(RequestStatus::Approved))),
        )
        .await;

        assert!(result.is_ok());
        let body = json_body(result.unwrap()).await;
        assert_eq!(body["status"], "APPROVED");
        assert_eq!(body["reviewedBy"], 2);

        let entries = AuditService::new(&test.db)
            .list_for_entity(AuditEntity::Request, 1)
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, AuditAction::Approve);
        assert_eq!(entries[0].user_id, 2);

        Ok(())
    }

    /// Expect 403 and an unchanged request when staff tries to review
    #[tokio::test]
    async fn staff_cannot_review() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_user("clerk", "password", "STAFF")
            .with_product("Assam", "BT-001")
            .build()
            .await?;
        test.inventory()
            .insert_request(1, Some(1), None, "PENDING")
            .await?;

        let result = update_request_status(
            State(test.to_app_state()),
            logged_in(&test, 1).await,
            Path(1),
            Ok(Json(review(RequestStatus::Rejected))),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let listed = list_requests(
            State(test.to_app_state()),
            logged_in(&test, 1).await,
            Query(RequestListParams::default()),
        )
        .await;
        let body = json_body(listed.unwrap()).await;
        assert_eq!(body[0]["status"], "PENDING");

        Ok(())
    }

    /// Expect 400 when the request was already reviewed
    #[tokio::test]
    async fn rejects_second_review() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_user("admin", "admin123", "ADMIN")
            .with_product("Assam", "BT-001")
            .build()
            .await?;
        test.inventory()
            .insert_request(1, Some(1), None, "APPROVED")
            .await?;

        let result = update_request_status(
            State(test.to_app_state()),
            logged_in(&test, 1).await,
            Path(1),
            Ok(Json(review(RequestStatus::Rejected))),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(resp).await["error"],
            "Request 1 has already been reviewed"
        );

        Ok(())
    }

    /// Expect 404 for a request that does not exist
    #[tokio::test]
    async fn fails_for_missing_request() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_user("admin", "admin123", "ADMIN")
            .build()
            .await?;

        let result = update_request_status(
            State(test.to_app_state()),
            logged_in(&test, 1).await,
            Path(42),
            Ok(Json(review(RequestStatus::Approved))),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
