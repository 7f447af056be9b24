use crate::server::data::{detachment::DetachmentRepository, faction::FactionRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod name_taken;
