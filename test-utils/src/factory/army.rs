use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test armies owned by a user.
///
/// # Example
///
/// ```rust,ignore
/// let army = ArmyFactory::new(&db, user.id, faction.id)
///     .detachment(detachment.id)
///     .points(2000)
///     .public(true)
///     .build()
///     .await?;
/// ```
pub struct ArmyFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    faction_id: i32,
    detachment_id: Option<i32>,
    name: String,
    points: i32,
    list_text: String,
    is_public: bool,
}

impl<'a> ArmyFactory<'a> {
    /// Defaults: name `"Army {id}"`, 2000 points, private, no detachment.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, faction_id: i32) -> Self {
        Self {
            db,
            user_id,
            faction_id,
            detachment_id: None,
            name: format!("Army {}", next_id()),
            points: 2000,
            list_text: "Captain\n10x Intercessors".to_string(),
            is_public: false,
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

    pub fn points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub async fn build(self) -> Result<entity::army::Model, DbErr> {
        let now = Utc::now();
        entity::army::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            faction_id: ActiveValue::Set(self.faction_id),
            detachment_id: ActiveValue::Set(self.detachment_id),
            name: ActiveValue::Set(self.name),
            points: ActiveValue::Set(self.points),
            list_text: ActiveValue::Set(self.list_text),
            is_public: ActiveValue::Set(self.is_public),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_army(
    db: &DatabaseConnection,
    user_id: i32,
    faction_id: i32,
) -> Result<entity::army::Model, DbErr> {
    ArmyFactory::new(db, user_id, faction_id).build().await
}
