//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! Holds an in-memory SQLite database and a session backed by an in-memory store. The
//! store is exposed so tests can open a second handle onto the same session.

use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by `store`
    pub session: Session,
    /// Store behind `session`
    pub store: Arc<MemoryStore>,
}

impl TestContext {
    /// Convert the database connection into any type constructible from it
    ///
    /// Lets integration tests build the application state without the test-utils crate
    /// depending on the main crate.
    ///
    /// ```ignore
    /// let state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, Arc::clone(&store), None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session, store })
    }

    /// Executes CREATE TABLE statements in order.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
