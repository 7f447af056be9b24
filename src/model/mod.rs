//! Data transfer objects shared by the HTTP API.
//!
//! Every type here is serialized as JSON in request or response bodies and derives
//! `ToSchema` so it appears in the generated OpenAPI document.

pub mod api;
pub mod army;
pub mod brief;
pub mod datasheet;
pub mod faction;
pub mod feature_cost;
pub mod game_session;
pub mod mission;
pub mod stratagem;
pub mod token;
pub mod user;
