//! Stock requests and their review.
//!
//! A request is created `PENDING` against exactly one product or raw material. Review is
//! reserved for administrators and moves it once to `APPROVED` or `REJECTED`.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        audit::AuditEntity,
        constants::{AuditAction, RequestStatus, Role},
        request::{CreateRequestDto, RequestDto, UpdateRequestStatusDto},
    },
    server::{
        data::{
            product::ProductRepository, raw_material::RawMaterialRepository,
            request::RequestRepository,
        },
        error::{validation::ValidationError, Error},
        model::{auth::AuthenticatedUser, db::RequestModel},
        service::{audit, validation::positive},
    },
};

pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestService<'a> {
    /// Creates a new instance of [`RequestService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Newest first, optionally restricted to one status.
    pub async fn list(&self, status: Option<RequestStatus>) -> Result<Vec<RequestDto>, Error> {
        RequestRepository::new(self.db)
            .get_all(status)
            .await?
            .into_iter()
            .map(RequestDto::try_from)
            .collect()
    }

    /// Creates a `PENDING` request on behalf of `actor`.
    ///
    /// # Returns
    /// - `Ok(RequestDto)` - The stored request
    /// - `Err(Error::ValidationError)` - Quantity not positive, not exactly one target, or
    ///   the target does not exist
    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        request: CreateRequestDto,
    ) -> Result<RequestDto, Error> {
        let request = CreateRequestDto {
            quantity: positive("quantity", request.quantity)?,
            notes: request
                .notes
                .map(|notes| notes.trim().to_string())
                .filter(|notes| !notes.is_empty()),
            ..request
        };

        let txn = self.db.begin().await?;

        match (request.product_id, request.raw_material_id) {
            (Some(product_id), None) => {
                if ProductRepository::new(&txn)
                    .get_by_id(product_id)
                    .await?
                    .is_none()
                {
                    return Err(ValidationError::UnknownReference {
                        field: "productId",
                        id: product_id,
                    }
                    .into());
                }
            }
            (None, Some(raw_material_id)) => {
                if RawMaterialRepository::new(&txn)
                    .get_by_id(raw_material_id)
                    .await?
                    .is_none()
                {
                    return Err(ValidationError::UnknownReference {
                        field: "rawMaterialId",
                        id: raw_material_id,
                    }
                    .into());
                }
            }
            _ => return Err(ValidationError::InvalidRequestTarget.into()),
        }

        let created = RequestRepository::new(&txn).create(actor.id, &request).await?;
        audit::record(
            &txn,
            actor.id,
            AuditAction::Create,
            AuditEntity::Request,
            created.id,
            Some(serde_json::json!({
                "productId": created.product_id,
                "rawMaterialId": created.raw_material_id,
                "quantity": created.quantity,
            })),
        )
        .await?;
        txn.commit().await?;

        tracing::info!(request_id = created.id, requester_id = actor.id, "created request");

        RequestDto::try_from(created)
    }

    /// Approves or rejects a pending request.
    ///
    /// Writes exactly one `APPROVE` or `REJECT` audit entry alongside the status change.
    pub async fn review(
        &self,
        reviewer: &AuthenticatedUser,
        id: i32,
        review: UpdateRequestStatusDto,
    ) -> Result<RequestDto, Error> {
        reviewer.require_role(Role::Admin)?;

        let action = match review.status {
            RequestStatus::Approved => AuditAction::Approve,
            RequestStatus::Rejected => AuditAction::Reject,
            RequestStatus::Pending => {
                return Err(ValidationError::InvalidStatusTransition(review.status).into())
            }
        };

        let txn = self.db.begin().await?;
        let request_repository = RequestRepository::new(&txn);

        let Some(current) = request_repository.get_by_id(id).await? else {
            return Err(Error::NotFound(AuditEntity::Request, id));
        };
        if current.status.parse::<RequestStatus>()? != RequestStatus::Pending {
            return Err(ValidationError::AlreadyReviewed(id).into());
        }

        let notes = review
            .notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty())
            .or(current.notes);

        let Some(updated) = request_repository
            .set_status(id, review.status, reviewer.id, notes)
            .await?
        else {
            return Err(Error::NotFound(AuditEntity::Request, id));
        };
        audit::record(
            &txn,
            reviewer.id,
            action,
            AuditEntity::Request,
            updated.id,
            Some(serde_json::json!({ "status": review.status })),
        )
        .await?;
        txn.commit().await?;

        tracing::info!(
            request_id = updated.id,
            reviewer_id = reviewer.id,
            status = %review.status,
            "reviewed request"
        );

        RequestDto::try_from(updated)
    }
}

impl TryFrom<RequestModel> for RequestDto {
    type Error = Error;

    fn try_from(request: RequestModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: request.id,
            requester_id: request.requester_id,
            product_id: request.product_id,
            raw_material_id: request.raw_material_id,
            quantity: request.quantity,
            status: request.status.parse()?,
            notes: request.notes,
            reviewed_by: request.reviewed_by,
            created_at: request.created_at,
            updated_at: request.updated_at,
        })
    }
}
