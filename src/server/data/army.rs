use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    model::army::{Army, ArmyParam, GalleryFilter},
    util::pagination::{Page, PaginationParams},
};

pub struct ArmyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArmyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, param: ArmyParam) -> Result<Army, DbErr> {
        let now = Utc::now();
        let entity = entity::army::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            faction_id: ActiveValue::Set(param.faction_id),
            detachment_id: ActiveValue::Set(param.detachment_id),
            name: ActiveValue::Set(param.name),
            points: ActiveValue::Set(param.points),
            list_text: ActiveValue::Set(param.list_text),
            is_public: ActiveValue::Set(param.is_public),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Army::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Army>, DbErr> {
        let entity = entity::prelude::Army::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Army::from_entity))
    }

    pub async fn update(&self, id: i32, param: ArmyParam) -> Result<Option<Army>, DbErr> {
        let Some(entity) = entity::prelude::Army::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::army::ActiveModel = entity.into();
        active.faction_id = ActiveValue::Set(param.faction_id);
        active.detachment_id = ActiveValue::Set(param.detachment_id);
        active.name = ActiveValue::Set(param.name);
        active.points = ActiveValue::Set(param.points);
        active.list_text = ActiveValue::Set(param.list_text);
        active.is_public = ActiveValue::Set(param.is_public);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Army::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Army::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets a user's armies, newest first.
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        params: PaginationParams,
    ) -> Result<Page<Army>, DbErr> {
        let select = entity::prelude::Army::find()
            .filter(entity::army::Column::UserId.eq(user_id))
            .order_by_desc(entity::army::Column::CreatedAt)
            .order_by_desc(entity::army::Column::Id);

        let page = super::fetch_page(self.db, select, params).await?;

        Ok(page.map(Army::from_entity))
    }

    /// Gets public armies matching the gallery filter, newest first.
    pub async fn get_public_paginated(
        &self,
        filter: &GalleryFilter,
        params: PaginationParams,
    ) -> Result<Page<Army>, DbErr> {
        let mut select =
            entity::prelude::Army::find().filter(entity::army::Column::IsPublic.eq(true));

        if let Some(faction_id) = filter.faction_id {
            select = select.filter(entity::army::Column::FactionId.eq(faction_id));
        }
        if let Some(detachment_id) = filter.detachment_id {
            select = select.filter(entity::army::Column::DetachmentId.eq(detachment_id));
        }
        if let Some(query) = &filter.query {
            select = select.filter(entity::army::Column::Name.contains(query));
        }

        let select = select
            .order_by_desc(entity::army::Column::CreatedAt)
            .order_by_desc(entity::army::Column::Id);

        let page = super::fetch_page(self.db, select, params).await?;

        Ok(page.map(Army::from_entity))
    }

    pub async fn count_by_faction(&self, faction_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Army::find()
            .filter(entity::army::Column::FactionId.eq(faction_id))
            .count(self.db)
            .await
    }

    pub async fn count_by_detachment(&self, detachment_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Army::find()
            .filter(entity::army::Column::DetachmentId.eq(detachment_id))
            .count(self.db)
            .await
    }
}
