use crate::server::{
    error::AppError, model::mission::MissionParam, service::mission::MissionService,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;
