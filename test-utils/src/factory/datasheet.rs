use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating datasheets without stored versions.
pub struct DatasheetFactory<'a> {
    db: &'a DatabaseConnection,
    faction_id: i32,
    name: String,
    is_enabled: bool,
    legacy_profile: Option<serde_json::Value>,
}

impl<'a> DatasheetFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, faction_id: i32) -> Self {
        Self {
            db,
            faction_id,
            name: format!("Datasheet {}", next_id()),
            is_enabled: true,
            legacy_profile: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    pub fn legacy_profile(mut self, profile: serde_json::Value) -> Self {
        self.legacy_profile = Some(profile);
        self
    }

    pub async fn build(self) -> Result<entity::datasheet::Model, DbErr> {
        let now = Utc::now();
        entity::datasheet::ActiveModel {
            faction_id: ActiveValue::Set(self.faction_id),
            name: ActiveValue::Set(self.name),
            role: ActiveValue::Set("Battleline".to_string()),
            keywords: ActiveValue::Set("Infantry,Battleline".to_string()),
            is_enabled: ActiveValue::Set(self.is_enabled),
            legacy_profile: ActiveValue::Set(self.legacy_profile),
            current_version_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an enabled datasheet carrying a legacy profile.
pub async fn create_datasheet(
    db: &DatabaseConnection,
    faction_id: i32,
) -> Result<entity::datasheet::Model, DbErr> {
    DatasheetFactory::new(db, faction_id)
        .legacy_profile(json!({ "movement": "6\"", "toughness": 4, "save": "3+" }))
        .build()
        .await
}
