use crate::server::{error::AppError, service::faction::FactionService};
use test_utils::{builder::TestBuilder, factory};

mod delete;
