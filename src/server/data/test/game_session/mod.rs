use crate::server::{
    data::game_session::GameSessionRepository,
    error::AppError,
    model::game_session::{SessionEventKind, SessionStatus},
};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod events;
mod save_state;
