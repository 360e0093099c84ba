//! Audit trail recording and listing.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::{
        audit::{AuditEntity, AuditEntryDto},
        constants::AuditAction,
    },
    server::{data::audit_log::AuditLogRepository, error::Error, model::db::AuditLogModel},
};

/// Entries returned when the caller gives no limit.
pub const DEFAULT_AUDIT_LIMIT: u64 = 100;
/// Upper bound on entries returned by a single listing.
pub const MAX_AUDIT_LIMIT: u64 = 500;

/// Appends one audit entry.
///
/// `db` should be the transaction of the write being described so the change and its
/// entry are committed or discarded together.
pub async fn record<C: ConnectionTrait>(
    db: &C,
    actor_id: i32,
    action: AuditAction,
    entity_type: AuditEntity,
    entity_id: i32,
    details: Option<serde_json::Value>,
) -> Result<AuditLogModel, Error> {
    let entry = AuditLogRepository::new(db)
        .create(
            actor_id,
            action,
            entity_type,
            entity_id,
            details.map(|details| details.to_string()),
        )
        .await?;

    tracing::debug!(
        user_id = actor_id,
        action = %action,
        entity_type = %entity_type,
        entity_id,
        "recorded audit entry"
    );

    Ok(entry)
}

pub struct AuditService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditService<'a> {
    /// Creates a new instance of [`AuditService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Newest entries first, capped at [`MAX_AUDIT_LIMIT`].
    pub async fn list_recent(&self, limit: Option<u64>) -> Result<Vec<AuditEntryDto>, Error> {
        let limit = limit.unwrap_or(DEFAULT_AUDIT_LIMIT).min(MAX_AUDIT_LIMIT);

        AuditLogRepository::new(self.db)
            .get_recent(limit)
            .await?
            .into_iter()
            .map(AuditEntryDto::try_from)
            .collect()
    }

    /// Entries for one record, oldest first.
    pub async fn list_for_entity(
        &self,
        entity_type: AuditEntity,
        entity_id: i32,
    ) -> Result<Vec<AuditEntryDto>, Error> {
        AuditLogRepository::new(self.db)
            .get_for_entity(entity_type, entity_id)
            .await?
            .into_iter()
            .map(AuditEntryDto::try_from)
            .collect()
    }
}

impl TryFrom<AuditLogModel> for AuditEntryDto {
    type Error = Error;

    fn try_from(entry: AuditLogModel) -> Result<Self, Self::Error> {
        // Details written before they were JSON encoded are surfaced as a plain string.
        let details = entry.details.map(|raw| {
            serde_json::from_str(&raw).unwrap_or(serde_json::Value::String(raw))
        });

        Ok(Self {
            id: entry.id,
            user_id: entry.user_id,
            action: entry.action.parse()?,
            entity_type: entry.entity_type.parse()?,
            entity_id: entry.entity_id,
            details,
            created_at: entry.created_at,
        })
    }
}
