//! HTTP handlers.
//!
//! Controllers authenticate the request through `AuthGuard`, convert DTOs into
//! parameter types, call a service and convert the result back into a DTO. They hold no
//! business rules of their own.

pub mod army;
pub mod auth;
pub mod brief;
pub mod datasheet;
pub mod detachment;
pub mod faction;
pub mod feature_cost;
pub mod game_session;
pub mod mission;
pub mod stratagem;
pub mod token;
pub mod user;
