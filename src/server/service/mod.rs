//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating repository calls, the token ledger and the brief generator
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Charging tokens and writing versions atomically

pub mod admin;
pub mod army;
pub mod auth;
pub mod datasheet;
pub mod detachment;
pub mod dossier;
pub mod faction;
pub mod feature_cost;
pub mod game_session;
pub mod generator;
pub mod ledger;
pub mod mission;
pub mod stratagem;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
