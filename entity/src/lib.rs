//! SeaORM entity models for the warbrief database schema.

pub mod prelude;

pub mod army;
pub mod datasheet;
pub mod datasheet_version;
pub mod detachment;
pub mod dossier;
pub mod dossier_version;
pub mod faction;
pub mod feature_cost;
pub mod game_session;
pub mod mission;
pub mod session_event;
pub mod stratagem;
pub mod token_ledger;
pub mod token_purchase;
pub mod user;
