use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Faction, Detachment};
///
/// let test = TestBuilder::new()
///     .with_table(Faction)
///     .with_table(Detachment)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Raw SQL run after the tables, for schema the entities cannot describe.
    statements: Vec<String>,
}

/// Partial unique index created by the feature cost migration.
const FEATURE_COST_ACTIVE_KEY_INDEX: &str = "CREATE UNIQUE INDEX idx_feature_cost_active_key \
     ON feature_cost (feature_key) WHERE deleted_at IS NULL";

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including foreign keys declared by the entity's relations. Tables
    /// should be added in dependency order.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the rules catalog: factions, detachments, stratagems, missions and datasheets.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Faction)
            .with_table(Detachment)
            .with_table(Stratagem)
            .with_table(Mission)
            .with_table(Datasheet)
            .with_table(DatasheetVersion)
    }

    /// Adds users and everything the token ledger touches.
    ///
    /// Tables: User, FeatureCost, TokenLedger, TokenPurchase.
    pub fn with_ledger_tables(mut self) -> Self {
        self.statements.push(FEATURE_COST_ACTIVE_KEY_INDEX.to_string());
        self.with_table(User)
            .with_table(FeatureCost)
            .with_table(TokenLedger)
            .with_table(TokenPurchase)
    }

    /// Adds every table in the schema in dependency order.
    ///
    /// Use this for tests crossing several domains, such as brief generation which
    /// reads armies, debits the ledger and writes dossier versions.
    pub fn with_all_tables(self) -> Self {
        self.with_ledger_tables()
            .with_catalog_tables()
            .with_table(Army)
            .with_table(Dossier)
            .with_table(DossierVersion)
            .with_table(GameSession)
            .with_table(SessionEvent)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_statements(self.statements).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
