use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test detachments under an existing faction.
pub struct DetachmentFactory<'a> {
    db: &'a DatabaseConnection,
    faction_id: i32,
    name: String,
}

impl<'a> DetachmentFactory<'a> {
    /// Defaults: name `"Detachment {id}"`.
    pub fn new(db: &'a DatabaseConnection, faction_id: i32) -> Self {
        Self {
            db,
            faction_id,
            name: format!("Detachment {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::detachment::Model, DbErr> {
        let now = Utc::now();
        entity::detachment::ActiveModel {
            faction_id: ActiveValue::Set(self.faction_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            icon_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_detachment(
    db: &DatabaseConnection,
    faction_id: i32,
) -> Result<entity::detachment::Model, DbErr> {
    DetachmentFactory::new(db, faction_id).build().await
}
