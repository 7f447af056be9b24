//! Dossier and dossier version repository.
//!
//! Version rows are insert-only. The dossier row carries the current pointer and, for
//! dossiers written before versioning, the legacy content.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        army::GalleryFilter,
        dossier::{dossier_version_from_entity, CreateDossierParam, Dossier},
        version::{NewVersion, Snapshot, VersionSource},
    },
    util::pagination::{Page, PaginationParams},
};

use super::version::VersionStore;

pub struct DossierRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DossierRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a dossier row without any versions.
    pub async fn create(&self, param: CreateDossierParam) -> Result<Dossier, DbErr> {
        let now = Utc::now();
        let entity = entity::dossier::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            army_id: ActiveValue::Set(Some(param.army_id)),
            faction_id: ActiveValue::Set(param.faction_id),
            detachment_id: ActiveValue::Set(param.detachment_id),
            title: ActiveValue::Set(param.title),
            is_public: ActiveValue::Set(param.is_public),
            legacy_content: ActiveValue::Set(None),
            current_version_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Dossier::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Dossier>, DbErr> {
        let entity = entity::prelude::Dossier::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Dossier::from_entity))
    }

    /// Gets the stored versions of a dossier ordered by version number.
    pub async fn get_versions(&self, dossier_id: i32) -> Result<Vec<Snapshot<String>>, DbErr> {
        let entities = entity::prelude::DossierVersion::find()
            .filter(entity::dossier_version::Column::DossierId.eq(dossier_id))
            .order_by_asc(entity::dossier_version::Column::VersionNumber)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(dossier_version_from_entity).collect())
    }

    /// Inserts a version row.
    ///
    /// The `(dossier_id, version_number)` unique index rejects a reused number.
    pub async fn insert_version(
        &self,
        dossier_id: i32,
        number: i32,
        content: String,
        source: VersionSource,
        ledger_entry_id: Option<i32>,
        created_at: DateTime<Utc>,
    ) -> Result<Snapshot<String>, DbErr> {
        let entity = entity::dossier_version::ActiveModel {
            dossier_id: ActiveValue::Set(dossier_id),
            version_number: ActiveValue::Set(number),
            content: ActiveValue::Set(content),
            source: ActiveValue::Set(source.as_str().to_string()),
            ledger_entry_id: ActiveValue::Set(ledger_entry_id),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(dossier_version_from_entity(entity))
    }

    /// Points the dossier at a stored version, or unsets the pointer.
    pub async fn set_current_version(
        &self,
        id: i32,
        version_id: Option<i32>,
    ) -> Result<Option<Dossier>, DbErr> {
        let Some(entity) = entity::prelude::Dossier::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::dossier::ActiveModel = entity.into();
        active.current_version_id = ActiveValue::Set(version_id);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Dossier::from_entity(active.update(self.db).await?)))
    }

    pub async fn set_visibility(&self, id: i32, is_public: bool) -> Result<Option<Dossier>, DbErr> {
        let Some(entity) = entity::prelude::Dossier::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::dossier::ActiveModel = entity.into();
        active.is_public = ActiveValue::Set(is_public);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Dossier::from_entity(active.update(self.db).await?)))
    }

    /// Deletes a dossier. Its versions cascade; ledger entries keep their textual reference.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Dossier::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets a user's dossiers, newest first.
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        params: PaginationParams,
    ) -> Result<Page<Dossier>, DbErr> {
        let select = entity::prelude::Dossier::find()
            .filter(entity::dossier::Column::UserId.eq(user_id))
            .order_by_desc(entity::dossier::Column::CreatedAt)
            .order_by_desc(entity::dossier::Column::Id);

        let page = super::fetch_page(self.db, select, params).await?;

        Ok(page.map(Dossier::from_entity))
    }

    /// Gets public dossiers matching the gallery filter, newest first.
    pub async fn get_public_paginated(
        &self,
        filter: &GalleryFilter,
        params: PaginationParams,
    ) -> Result<Page<Dossier>, DbErr> {
        let mut select =
            entity::prelude::Dossier::find().filter(entity::dossier::Column::IsPublic.eq(true));

        if let Some(faction_id) = filter.faction_id {
            select = select.filter(entity::dossier::Column::FactionId.eq(faction_id));
        }
        if let Some(detachment_id) = filter.detachment_id {
            select = select.filter(entity::dossier::Column::DetachmentId.eq(detachment_id));
        }
        if let Some(query) = &filter.query {
            select = select.filter(entity::dossier::Column::Title.contains(query));
        }

        let select = select
            .order_by_desc(entity::dossier::Column::CreatedAt)
            .order_by_desc(entity::dossier::Column::Id);

        let page = super::fetch_page(self.db, select, params).await?;

        Ok(page.map(Dossier::from_entity))
    }

    pub async fn count_by_faction(&self, faction_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Dossier::find()
            .filter(entity::dossier::Column::FactionId.eq(faction_id))
            .count(self.db)
            .await
    }

    /// Detaches every dossier from a deleted army.
    pub async fn clear_army(&self, army_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Dossier::update_many()
            .set(entity::dossier::ActiveModel {
                army_id: ActiveValue::Set(None),
                ..Default::default()
            })
            .filter(entity::dossier::Column::ArmyId.eq(army_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[async_trait]
impl<'a, C: ConnectionTrait> VersionStore for DossierRepository<'a, C> {
    type Owner = Dossier;
    /// Ledger entry that paid for the version.
    type Meta = Option<i32>;

    async fn load_versions(&self, owner_id: i32) -> Result<Vec<Snapshot<String>>, DbErr> {
        self.get_versions(owner_id).await
    }

    async fn store_version(
        &self,
        owner_id: i32,
        number: i32,
        version: NewVersion<String, Option<i32>>,
        created_at: DateTime<Utc>,
    ) -> Result<Snapshot<String>, DbErr> {
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
    ) -> Result<Option<Dossier>, DbErr> {
        self.set_current_version(owner_id, version_id).await
    }
}
