//! Database backed session store.
//!
//! Implements tower-sessions' [`SessionStore`] over the `tower_sessions` table so sessions
//! live in the same database as the inventory and survive restarts. Session data is
//! stored as a JSON object and the expiry as a unix timestamp in seconds.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use time::OffsetDateTime;
use tower_sessions::{
    session::{Id, Record},
    session_store::{self, ExpiredDeletion, SessionStore},
};

#[derive(Clone, Debug)]
pub struct SeaOrmSessionStore {
    db: DatabaseConnection,
}

impl SeaOrmSessionStore {
    /// Creates a new instance of [`SeaOrmSessionStore`]
    ///
    /// The `tower_sessions` table is created by the migrations.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn exists(&self, id: &Id) -> Result<bool, DbErr> {
        let found = entity::prelude::TowerSession::find_by_id(id.to_string())
            .one(&self.db)
            .await?;

        Ok(found.is_some())
    }

    fn to_active_model(
        record: &Record,
    ) -> Result<entity::tower_session::ActiveModel, session_store::Error> {
        let data = serde_json::to_string(&record.data)
            .map_err(|e| session_store::Error::Encode(e.to_string()))?;

        Ok(entity::tower_session::ActiveModel {
            id: ActiveValue::Set(record.id.to_string()),
            data: ActiveValue::Set(data),
            expiry_date: ActiveValue::Set(record.expiry_date.unix_timestamp()),
        })
    }
}

fn backend_error(err: DbErr) -> session_store::Error {
    session_store::Error::Backend(err.to_string())
}

#[async_trait]
impl SessionStore for SeaOrmSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        // Ids are random; on the rare collision draw a new one instead of overwriting
        // another user's session.
        while self.exists(&record.id).await.map_err(backend_error)? {
            record.id = Id::default();
        }

        entity::prelude::TowerSession::insert(Self::to_active_model(record)?)
            .exec_without_returning(&self.db)
            .await
            .map_err(backend_error)?;

        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        entity::prelude::TowerSession::insert(Self::to_active_model(record)?)
            .on_conflict(
                OnConflict::column(entity::tower_session::Column::Id)
                    .update_columns([
                        entity::tower_session::Column::Data,
                        entity::tower_session::Column::ExpiryDate,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(backend_error)?;

        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let Some(row) = entity::prelude::TowerSession::find_by_id(session_id.to_string())
            .filter(entity::tower_session::Column::ExpiryDate.gt(now))
            .one(&self.db)
            .await
            .map_err(backend_error)?
        else {
            return Ok(None);
        };

        let data: HashMap<String, serde_json::Value> = serde_json::from_str(&row.data)
            .map_err(|e| session_store::Error::Decode(e.to_string()))?;
        let expiry_date = OffsetDateTime::from_unix_timestamp(row.expiry_date)
            .map_err(|e| session_store::Error::Decode(e.to_string()))?;

        Ok(Some(Record {
            id: *session_id,
            data,
            expiry_date,
        }))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        entity::prelude::TowerSession::delete_by_id(session_id.to_string())
            .exec(&self.db)
            .await
            .map_err(backend_error)?;

        Ok(())
    }
}

#[async_trait]
impl ExpiredDeletion for SeaOrmSessionStore {
    async fn delete_expired(&self) -> session_store::Result<()> {
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let result = entity::prelude::TowerSession::delete_many()
            .filter(entity::tower_session::Column::ExpiryDate.lte(now))
            .exec(&self.db)
            .await
            .map_err(backend_error)?;

        if result.rows_affected > 0 {
            tracing::debug!(count = result.rows_affected, "deleted expired sessions");
        }

        Ok(())
    }
}
