//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod army;
pub mod datasheet;
pub mod dossier;
pub mod faction;
pub mod feature_cost;
pub mod game_session;
pub mod mission;
pub mod stratagem;
pub mod token;
pub mod user;
pub mod version;
