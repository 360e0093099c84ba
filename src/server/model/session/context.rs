//! Request-scoped session context.
//!
//! Controllers never touch the raw `tower_sessions::Session`; they receive a
//! [`SessionContext`] extracted from the request. Reads go through the accessor methods
//! and every state change goes through one of the named lifecycle operations, so each
//! mutation point is visible at the call site.

use axum::{extract::FromRequestParts, http::request::Parts};
use time::OffsetDateTime;
use tower_sessions::{session::Id, Session};

use crate::server::{error::Error, model::session::user::SessionUserId};

#[derive(Clone, Debug)]
pub struct SessionContext {
    session: Session,
}

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Session identifier, `None` until the session has been persisted.
    pub fn id(&self) -> Option<Id> {
        self.session.id()
    }

    /// ID of the authenticated user, if any.
    pub async fn user_id(&self) -> Result<Option<i32>, Error> {
        SessionUserId::get(&self.session).await
    }

    /// Point in time after which the session is no longer accepted.
    pub fn expiry_date(&self) -> OffsetDateTime {
        self.session.expiry_date()
    }

    /// Associates the session with `user_id`.
    pub async fn set_user(&self, user_id: i32) -> Result<(), Error> {
        SessionUserId::insert(&self.session, user_id).await
    }

    /// Persists the current session state to the store immediately.
    pub async fn save(&self) -> Result<(), Error> {
        self.session.save().await?;

        Ok(())
    }

    /// Invalidates the session: clears its data, deletes it from the store and expires
    /// the cookie.
    pub async fn destroy(&self) -> Result<(), Error> {
        self.session.flush().await?;

        Ok(())
    }

    /// Rotates the session identifier while keeping the stored data.
    ///
    /// The previous identifier is deleted from the store and the data is saved under the
    /// new one before returning.
    pub async fn regenerate(&self) -> Result<(), Error> {
        self.session.cycle_id().await?;
        self.session.save().await?;

        Ok(())
    }

    /// Replaces the in-memory session data with the copy held by the store.
    pub async fn reload(&self) -> Result<(), Error> {
        self.session.load().await?;

        Ok(())
    }

    /// Pushes the expiry forward without changing session data.
    pub async fn touch(&self) -> Result<(), Error> {
        let expiry = self.session.expiry();
        self.session.set_expiry(expiry);
        self.session.save().await?;

        Ok(())
    }
}

impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = <Session as FromRequestParts<S>>::Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Session::from_request_parts(parts, state)
            .await
            .map(SessionContext::new)
    }
}
