use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::faction::{Faction, FactionParam};

pub struct FactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FactionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all factions ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Faction>, DbErr> {
        let entities = entity::prelude::Faction::find()
            .order_by_asc(entity::faction::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Faction::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Faction>, DbErr> {
        let entity = entity::prelude::Faction::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Faction::from_entity))
    }

    /// Checks whether another faction already uses `name`, ignoring case.
    ///
    /// # Arguments
    /// - `name` - Trimmed name to check
    /// - `exclude_id` - Faction being renamed, which may keep its own name
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut select = entity::prelude::Faction::find()
            .filter(super::equals_ignore_case(entity::faction::Column::Name, name));

        if let Some(id) = exclude_id {
            select = select.filter(entity::faction::Column::Id.ne(id));
        }

        Ok(select.count(self.db).await? > 0)
    }

    pub async fn create(&self, param: FactionParam) -> Result<Faction, DbErr> {
        let now = Utc::now();
        let entity = entity::faction::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            icon_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Faction::from_entity(entity))
    }

    /// # Returns
    /// - `Ok(None)` - No faction with that ID
    pub async fn update(&self, id: i32, param: FactionParam) -> Result<Option<Faction>, DbErr> {
        let Some(entity) = entity::prelude::Faction::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::faction::ActiveModel = entity.into();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Faction::from_entity(active.update(self.db).await?)))
    }

    /// Sets or clears the icon URL.
    pub async fn set_icon(&self, id: i32, icon_url: Option<String>) -> Result<Option<Faction>, DbErr> {
        let Some(entity) = entity::prelude::Faction::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::faction::ActiveModel = entity.into();
        active.icon_url = ActiveValue::Set(icon_url);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Faction::from_entity(active.update(self.db).await?)))
    }

    /// Deletes a faction. Detachments, their stratagems and datasheets cascade.
    ///
    /// # Returns
    /// - `Ok(false)` - No faction with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Faction::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
