//! Append-only audit log repository.
//!
//! Entries are inserted and read, never updated or deleted; the repository does not
//! expose any method that could do either.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::{audit::AuditEntity, constants::AuditAction};

pub struct AuditLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuditLogRepository<'a, C> {
    /// Creates a new instance of [`AuditLogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        action: AuditAction,
        entity_type: AuditEntity,
        entity_id: i32,
        details: Option<String>,
    ) -> Result<entity::audit_log::Model, DbErr> {
        let entry = entity::audit_log::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            action: ActiveValue::Set(action.as_str().to_string()),
            entity_type: ActiveValue::Set(entity_type.as_str().to_string()),
            entity_id: ActiveValue::Set(entity_id),
            details: ActiveValue::Set(details),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    /// Most recent entries first
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<entity::audit_log::Model>, DbErr> {
        entity::prelude::AuditLog::find()
            .order_by_desc(entity::audit_log::Column::CreatedAt)
            .order_by_desc(entity::audit_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Entries referring to one record, oldest first
    pub async fn get_for_entity(
        &self,
        entity_type: AuditEntity,
        entity_id: i32,
    ) -> Result<Vec<entity::audit_log::Model>, DbErr> {
        entity::prelude::AuditLog::find()
            .filter(entity::audit_log::Column::EntityType.eq(entity_type.as_str()))
            .filter(entity::audit_log::Column::EntityId.eq(entity_id))
            .order_by_asc(entity::audit_log::Column::Id)
            .all(self.db)
            .await
    }
}
