use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::faction::{Detachment, DetachmentParam};

pub struct DetachmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DetachmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the detachments of a faction ordered by name.
    pub async fn get_by_faction(&self, faction_id: i32) -> Result<Vec<Detachment>, DbErr> {
        let entities = entity::prelude::Detachment::find()
            .filter(entity::detachment::Column::FactionId.eq(faction_id))
            .order_by_asc(entity::detachment::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Detachment::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Detachment>, DbErr> {
        let entity = entity::prelude::Detachment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Detachment::from_entity))
    }

    /// Checks whether another detachment of the same faction uses `name`, ignoring case.
    pub async fn name_taken(
        &self,
        faction_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut select = entity::prelude::Detachment::find()
            .filter(entity::detachment::Column::FactionId.eq(faction_id))
            .filter(super::equals_ignore_case(entity::detachment::Column::Name, name));

        if let Some(id) = exclude_id {
            select = select.filter(entity::detachment::Column::Id.ne(id));
        }

        Ok(select.count(self.db).await? > 0)
    }

    pub async fn create(&self, faction_id: i32, param: DetachmentParam) -> Result<Detachment, DbErr> {
        let now = Utc::now();
        let entity = entity::detachment::ActiveModel {
            faction_id: ActiveValue::Set(faction_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            icon_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Detachment::from_entity(entity))
    }

    pub async fn update(&self, id: i32, param: DetachmentParam) -> Result<Option<Detachment>, DbErr> {
        let Some(entity) = entity::prelude::Detachment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::detachment::ActiveModel = entity.into();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Detachment::from_entity(active.update(self.db).await?)))
    }

    pub async fn set_icon(
        &self,
        id: i32,
        icon_url: Option<String>,
    ) -> Result<Option<Detachment>, DbErr> {
        let Some(entity) = entity::prelude::Detachment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::detachment::ActiveModel = entity.into();
        active.icon_url = ActiveValue::Set(icon_url);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Detachment::from_entity(active.update(self.db).await?)))
    }

    /// Deletes a detachment; its stratagems cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Detachment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
