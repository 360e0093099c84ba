use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{constants::RequestStatus, request::CreateRequestDto};

pub struct RequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RequestRepository<'a, C> {
    /// Creates a new instance of [`RequestRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new request in [`RequestStatus::Pending`]
    pub async fn create(
        &self,
        requester_id: i32,
        request: &CreateRequestDto,
    ) -> Result<entity::request::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let request = entity::request::ActiveModel {
            requester_id: ActiveValue::Set(requester_id),
            product_id: ActiveValue::Set(request.product_id),
            raw_material_id: ActiveValue::Set(request.raw_material_id),
            quantity: ActiveValue::Set(request.quantity),
            status: ActiveValue::Set(RequestStatus::Pending.as_str().to_string()),
            notes: ActiveValue::Set(request.notes.clone()),
            reviewed_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        request.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::request::Model>, DbErr> {
        entity::prelude::Request::find_by_id(id).one(self.db).await
    }

    /// Requests newest first, optionally restricted to one status
    pub async fn get_all(
        &self,
        status: Option<RequestStatus>,
    ) -> Result<Vec<entity::request::Model>, DbErr> {
        let mut query = entity::prelude::Request::find();
        if let Some(status) = status {
            query = query.filter(entity::request::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_desc(entity::request::Column::CreatedAt)
            .order_by_desc(entity::request::Column::Id)
            .all(self.db)
            .await
    }

    /// Records the review outcome of a request
    ///
    /// `notes` replaces the existing notes only when provided. Returns `Ok(None)` if no
    /// request with `id` exists.
    pub async fn set_status(
        &self,
        id: i32,
        status: RequestStatus,
        reviewer_id: i32,
        notes: Option<String>,
    ) -> Result<Option<entity::request::Model>, DbErr> {
        let Some(request) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut request_am = request.into_active_model();
        request_am.status = ActiveValue::Set(status.as_str().to_string());
        request_am.reviewed_by = ActiveValue::Set(Some(reviewer_id));
        if notes.is_some() {
            request_am.notes = ActiveValue::Set(notes);
        }
        request_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let request = request_am.update(self.db).await?;

        Ok(Some(request))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Request::find().count(self.db).await
    }

    pub async fn count_by_status(&self, status: RequestStatus) -> Result<u64, DbErr> {
        entity::prelude::Request::find()
            .filter(entity::request::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }
}
