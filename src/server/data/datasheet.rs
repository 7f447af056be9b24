//! Datasheet and datasheet version repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use serde_json::Value;

use crate::server::model::{
    datasheet::{datasheet_version_from_entity, join_keywords, CreateDatasheetParam, Datasheet},
    version::{NewVersion, Snapshot, VersionSource},
};

use super::version::VersionStore;

pub struct DatasheetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DatasheetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a datasheet row without any versions.
    pub async fn create(&self, param: &CreateDatasheetParam) -> Result<Datasheet, DbErr> {
        let now = Utc::now();
        let entity = entity::datasheet::ActiveModel {
            faction_id: ActiveValue::Set(param.faction_id),
            name: ActiveValue::Set(param.name.clone()),
            role: ActiveValue::Set(param.role.clone()),
            keywords: ActiveValue::Set(join_keywords(&param.keywords)),
            is_enabled: ActiveValue::Set(true),
            legacy_profile: ActiveValue::Set(None),
            current_version_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Datasheet::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Datasheet>, DbErr> {
        let entity = entity::prelude::Datasheet::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Datasheet::from_entity))
    }

    /// Lists datasheets ordered by name.
    ///
    /// # Arguments
    /// - `faction_id` - Restrict to one faction
    /// - `enabled_only` - Hide disabled datasheets
    pub async fn get_all(
        &self,
        faction_id: Option<i32>,
        enabled_only: bool,
    ) -> Result<Vec<Datasheet>, DbErr> {
        let mut select = entity::prelude::Datasheet::find();

        if let Some(faction_id) = faction_id {
            select = select.filter(entity::datasheet::Column::FactionId.eq(faction_id));
        }
        if enabled_only {
            select = select.filter(entity::datasheet::Column::IsEnabled.eq(true));
        }

        let entities = select
            .order_by_asc(entity::datasheet::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Datasheet::from_entity).collect())
    }

    /// Checks whether the faction already has a datasheet named `name`, ignoring case.
    pub async fn name_taken(&self, faction_id: i32, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Datasheet::find()
            .filter(entity::datasheet::Column::FactionId.eq(faction_id))
            .filter(super::equals_ignore_case(entity::datasheet::Column::Name, name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the stored versions ordered by version number.
    pub async fn get_versions(&self, datasheet_id: i32) -> Result<Vec<Snapshot<Value>>, DbErr> {
        let entities = entity::prelude::DatasheetVersion::find()
            .filter(entity::datasheet_version::Column::DatasheetId.eq(datasheet_id))
            .order_by_asc(entity::datasheet_version::Column::VersionNumber)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(datasheet_version_from_entity)
            .collect())
    }

    pub async fn insert_version(
        &self,
        datasheet_id: i32,
        number: i32,
        profile: Value,
        source: VersionSource,
        note: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Snapshot<Value>, DbErr> {
        let entity = entity::datasheet_version::ActiveModel {
            datasheet_id: ActiveValue::Set(datasheet_id),
            version_number: ActiveValue::Set(number),
            profile: ActiveValue::Set(profile),
            source: ActiveValue::Set(source.as_str().to_string()),
            note: ActiveValue::Set(note),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(datasheet_version_from_entity(entity))
    }

    pub async fn set_current_version(
        &self,
        id: i32,
        version_id: Option<i32>,
    ) -> Result<Option<Datasheet>, DbErr> {
        let Some(entity) = entity::prelude::Datasheet::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::datasheet::ActiveModel = entity.into();
        active.current_version_id = ActiveValue::Set(version_id);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Datasheet::from_entity(active.update(self.db).await?)))
    }

    pub async fn set_enabled(&self, id: i32, is_enabled: bool) -> Result<Option<Datasheet>, DbErr> {
        let Some(entity) = entity::prelude::Datasheet::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::datasheet::ActiveModel = entity.into();
        active.is_enabled = ActiveValue::Set(is_enabled);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Datasheet::from_entity(active.update(self.db).await?)))
    }
}

#[async_trait]
impl<'a, C: ConnectionTrait> VersionStore for DatasheetRepository<'a, C> {
    type Owner = Datasheet;
    /// Admin's note on the change.
    type Meta = Option<String>;

    async fn load_versions(&self, owner_id: i32) -> Result<Vec<Snapshot<Value>>, DbErr> {
        self.get_versions(owner_id).await
    }

    async fn store_version(
        &self,
        owner_id: i32,
        number: i32,
        version: NewVersion<Value, Option<String>>,
        created_at: DateTime<Utc>,
    ) -> Result<Snapshot<Value>, DbErr> {
        self.insert_version(
            owner_id,
            number,
            version.body,
            version.source,
            version.meta,
            created_at,
        )
        .await
    }

    async fn point_current(
        &self,
        owner_id: i32,
        version_id: Option<i32>,
    ) -> Result<Option<Datasheet>, DbErr> {
        self.set_current_version(owner_id, version_id).await
    }
}
