use crate::server::{error::AppError, model::army::ArmyParam, service::army::ArmyService};
use test_utils::{builder::TestBuilder, factory};

mod create;

fn param(faction_id: i32, detachment_id: Option<i32>) -> ArmyParam {
    ArmyParam {
        name: "  Spearhead  ".to_string(),
        faction_id,
        detachment_id,
        points: 2000,
        list_text: "Captain\nIntercessors x10".to_string(),
        is_public: false,
    }
}
