use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_mission(db: &DatabaseConnection) -> Result<entity::mission::Model, DbErr> {
    entity::mission::ActiveModel {
        name: ActiveValue::Set(format!("Mission {}", next_id())),
        deployment: ActiveValue::Set("Dawn of War".to_string()),
        primary_objective: ActiveValue::Set("Hold more objectives than your opponent.".to_string()),
        rules: ActiveValue::Set("Score at the end of each command phase.".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
