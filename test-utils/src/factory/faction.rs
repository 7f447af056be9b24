use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test factions.
pub struct FactionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    icon_url: Option<String>,
}

impl<'a> FactionFactory<'a> {
    /// Defaults: name `"Faction {id}"`, no icon.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Faction {}", next_id()),
            icon_url: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    pub async fn build(self) -> Result<entity::faction::Model, DbErr> {
        let now = Utc::now();
        entity::faction::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            icon_url: ActiveValue::Set(self.icon_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_faction(db: &DatabaseConnection) -> Result<entity::faction::Model, DbErr> {
    FactionFactory::new(db).build().await
}
