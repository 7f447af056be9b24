//! Warbrief Test Utils
//!
//! Shared testing utilities for the warbrief backend. Provides a builder for test
//! contexts backed by in-memory SQLite databases, and factories that insert
//! entities with unique defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn spends_tokens() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_ledger_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::user::UserFactory::new(db).token_balance(50).build().await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
