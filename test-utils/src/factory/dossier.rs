use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating dossiers.
///
/// Builds the dossier row only. Versions are added with [`create_dossier_version`] or
/// through the dossier service, and `legacy_content` simulates rows written before
/// version history existed.
pub struct DossierFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    faction_id: i32,
    army_id: Option<i32>,
    detachment_id: Option<i32>,
    title: String,
    is_public: bool,
    legacy_content: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> DossierFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32, faction_id: i32) -> Self {
        Self {
            db,
            user_id,
            faction_id,
            army_id: None,
            detachment_id: None,
            title: format!("Brief {}", next_id()),
            is_public: false,
            legacy_content: None,
            created_at: Utc::now(),
        }
    }

    /// Links the dossier to an army, copying nothing from it.
    pub fn army(mut self, army_id: i32) -> Self {
        self.army_id = Some(army_id);
        self
    }

    pub fn detachment(mut self, detachment_id: i32) -> Self {
        self.detachment_id = Some(detachment_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn legacy_content(mut self, content: impl Into<String>) -> Self {
        self.legacy_content = Some(content.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::dossier::Model, DbErr> {
        entity::dossier::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            army_id: ActiveValue::Set(self.army_id),
            faction_id: ActiveValue::Set(self.faction_id),
            detachment_id: ActiveValue::Set(self.detachment_id),
            title: ActiveValue::Set(self.title),
            is_public: ActiveValue::Set(self.is_public),
            legacy_content: ActiveValue::Set(self.legacy_content),
            current_version_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_dossier(
    db: &DatabaseConnection,
    user_id: i32,
    faction_id: i32,
) -> Result<entity::dossier::Model, DbErr> {
    DossierFactory::new(db, user_id, faction_id).build().await
}

/// Inserts a stored version row with source `edited`.
pub async fn create_dossier_version(
    db: &DatabaseConnection,
    dossier_id: i32,
    version_number: i32,
    content: &str,
) -> Result<entity::dossier_version::Model, DbErr> {
    entity::dossier_version::ActiveModel {
        dossier_id: ActiveValue::Set(dossier_id),
        version_number: ActiveValue::Set(version_number),
        content: ActiveValue::Set(content.to_string()),
        source: ActiveValue::Set("edited".to_string()),
        ledger_entry_id: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
