use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating game sessions.
pub struct GameSessionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    army_id: Option<i32>,
    mission_id: Option<i32>,
    mission_mode: String,
    status: String,
    battle_round: i32,
    command_points: i32,
}

impl<'a> GameSessionFactory<'a> {
    /// Defaults: active, fixed mode, round 1, 0 CP.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            army_id: None,
            mission_id: None,
            mission_mode: "fixed".to_string(),
            status: "active".to_string(),
            battle_round: 1,
            command_points: 0,
        }
    }

    pub fn army(mut self, army_id: i32) -> Self {
        self.army_id = Some(army_id);
        self
    }

    pub fn mission(mut self, mission_id: i32) -> Self {
        self.mission_id = Some(mission_id);
        self
    }

    pub fn tactical(mut self) -> Self {
        self.mission_mode = "tactical".to_string();
        self
    }

    pub fn completed(mut self) -> Self {
        self.status = "completed".to_string();
        self
    }

    pub fn battle_round(mut self, battle_round: i32) -> Self {
        self.battle_round = battle_round;
        self
    }

    pub fn command_points(mut self, command_points: i32) -> Self {
        self.command_points = command_points;
        self
    }

    pub async fn build(self) -> Result<entity::game_session::Model, DbErr> {
        let now = Utc::now();
        let ended_at = (self.status == "completed").then_some(now);
        entity::game_session::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            army_id: ActiveValue::Set(self.army_id),
            mission_id: ActiveValue::Set(self.mission_id),
            opponent: ActiveValue::Set(None),
            mission_mode: ActiveValue::Set(self.mission_mode),
            status: ActiveValue::Set(self.status),
            battle_round: ActiveValue::Set(self.battle_round),
            command_points: ActiveValue::Set(self.command_points),
            primary_score: ActiveValue::Set(0),
            secondaries: ActiveValue::Set(json!([])),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ended_at: ActiveValue::Set(ended_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_game_session(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::game_session::Model, DbErr> {
    GameSessionFactory::new(db, user_id).build().await
}
