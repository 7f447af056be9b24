use crate::server::{
    error::AppError,
    model::{datasheet::CreateDatasheetParam, version::VersionSource},
    service::datasheet::DatasheetService,
};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update_profile;
