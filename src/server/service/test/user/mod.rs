use crate::server::{error::AppError, service::user::UserService};
use test_utils::{builder::TestBuilder, factory};

mod set_admin;
