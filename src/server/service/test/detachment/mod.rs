use crate::server::{error::AppError, service::detachment::DetachmentService};
use test_utils::{builder::TestBuilder, factory};

mod delete;
