//! Factory methods for creating test data.
//!
//! Each entity has a factory module with a `*Factory` builder for customization and a
//! `create_*` function for quick default creation. Defaults are unique per call so tests
//! can create several rows of the same kind without tripping unique constraints.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(db).await?;
//! let (faction, detachment) = factory::helpers::create_faction_with_detachment(db).await?;
//!
//! let army = factory::army::ArmyFactory::new(db, user.id, faction.id)
//!     .detachment(detachment.id)
//!     .public(true)
//!     .build()
//!     .await?;
//! ```

pub mod army;
pub mod datasheet;
pub mod detachment;
pub mod dossier;
pub mod faction;
pub mod feature_cost;
pub mod game_session;
pub mod helpers;
pub mod mission;
pub mod stratagem;
pub mod token_purchase;
pub mod user;

pub use army::create_army;
pub use datasheet::create_datasheet;
pub use detachment::create_detachment;
pub use dossier::create_dossier;
pub use faction::create_faction;
pub use feature_cost::create_feature_cost;
pub use game_session::create_game_session;
pub use mission::create_mission;
pub use stratagem::create_stratagem;
pub use token_purchase::create_token_purchase;
pub use user::create_user;
