use crate::server::{
    error::AppError, model::feature_cost::CreateFeatureCostParam,
    service::feature_cost::FeatureCostService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;

fn param(feature_key: &str, cost: i64) -> CreateFeatureCostParam {
    CreateFeatureCostParam {
        feature_key: feature_key.to_string(),
        display_name: "Brief generation".to_string(),
        description: None,
        cost,
    }
}
