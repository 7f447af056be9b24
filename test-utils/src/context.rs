use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Isolated test environment: an in-memory SQLite database and an optional session.
///
/// Both resources are created lazily and live as long as the context, so a test can
/// drop the context to throw the whole database away.
pub struct TestContext {
    /// Connection to the in-memory database, created on first use.
    pub db: Option<DatabaseConnection>,

    /// Session stored in the same in-memory database, created on first use.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates an empty context without a database connection.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Returns the database connection created by `TestBuilder::build()`.
    ///
    /// # Panics
    /// Panics when called on a context that was never given tables.
    pub fn db(&self) -> &DatabaseConnection {
        self.db
            .as_ref()
            .expect("test context was built without a database")
    }

    /// Gets or opens the in-memory SQLite connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Connection owned by this context
    /// - `Err(TestError::Database)` - SQLite could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;
                Ok(&*self.db.insert(db))
            }
        }
    }

    /// Executes CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build()`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Executes raw SQL statements in order after the tables exist.
    pub async fn with_statements(&mut self, stmts: Vec<String>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute_unprepared(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates a session backed by the context's database.
    ///
    /// The first call migrates the session store table into the in-memory database.
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestBuilder::new().with_table(User).build().await?;
    /// let session = test.session().await?;
    /// AuthSession::new(session).set_user_id(user.id).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let pool = db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());
                session_store
                    .migrate()
                    .await
                    .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                Ok(&*self.session.insert(session))
            }
        }
    }

    /// Gets both the database and the session, creating them if needed.
    ///
    /// Avoids holding two mutable borrows of the context at once.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(sea_orm::DbErr::Custom("test context not initialized".to_string()).into()),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
