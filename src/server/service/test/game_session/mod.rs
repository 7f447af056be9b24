use crate::server::{
    error::AppError,
    model::game_session::{CreateGameSessionParam, MissionMode, Secondary, SessionStatus},
    service::game_session::GameSessionService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod mutations;
mod use_stratagem;

fn secondary(name: &str, points: i32) -> Secondary {
    Secondary {
        name: name.to_string(),
        points,
    }
}
