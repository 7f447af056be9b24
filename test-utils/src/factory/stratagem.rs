use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating stratagems. No detachment means a core stratagem.
pub struct StratagemFactory<'a> {
    db: &'a DatabaseConnection,
    detachment_id: Option<i32>,
    name: String,
    cp_cost: i32,
    phase: String,
}

impl<'a> StratagemFactory<'a> {
    /// Defaults: core, 1 CP, `any` phase.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            detachment_id: None,
            name: format!("Stratagem {}", next_id()),
            cp_cost: 1,
            phase: "any".to_string(),
        }
    }

    pub fn detachment(mut self, detachment_id: i32) -> Self {
        self.detachment_id = Some(detachment_id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn cp_cost(mut self, cp_cost: i32) -> Self {
        self.cp_cost = cp_cost;
        self
    }

    pub fn phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = phase.into();
        self
    }

    pub async fn build(self) -> Result<entity::stratagem::Model, DbErr> {
        entity::stratagem::ActiveModel {
            detachment_id: ActiveValue::Set(self.detachment_id),
            name: ActiveValue::Set(self.name),
            cp_cost: ActiveValue::Set(self.cp_cost),
            phase: ActiveValue::Set(self.phase),
            description: ActiveValue::Set("Test stratagem.".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_stratagem(db: &DatabaseConnection) -> Result<entity::stratagem::Model, DbErr> {
    StratagemFactory::new(db).build().await
}
