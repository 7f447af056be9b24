use crate::server::{
    data::feature_cost::FeatureCostRepository, model::feature_cost::CreateFeatureCostParam,
};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_active_by_key;
mod get_all;
mod soft_delete;
