//! Feature cost repository.
//!
//! Costs are soft deleted: a deleted row keeps its ID so ledger entries that reference it
//! stay valid, and a new row with the same key may be created afterwards.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::feature_cost::{
    CreateFeatureCostParam, FeatureCost, UpdateFeatureCostParam,
};

pub struct FeatureCostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FeatureCostRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the active (not deleted) cost row for a feature key.
    pub async fn find_active_by_key(&self, feature_key: &str) -> Result<Option<FeatureCost>, DbErr> {
        let entity = entity::prelude::FeatureCost::find()
            .filter(entity::feature_cost::Column::FeatureKey.eq(feature_key))
            .filter(entity::feature_cost::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(FeatureCost::from_entity))
    }

    /// Finds a cost row by ID, including soft-deleted rows.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<FeatureCost>, DbErr> {
        let entity = entity::prelude::FeatureCost::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(FeatureCost::from_entity))
    }

    /// Lists costs ordered by key, newest row first for repeated keys.
    ///
    /// # Arguments
    /// - `include_deleted` - Also return soft-deleted rows
    pub async fn get_all(&self, include_deleted: bool) -> Result<Vec<FeatureCost>, DbErr> {
        let mut select = entity::prelude::FeatureCost::find();

        if !include_deleted {
            select = select.filter(entity::feature_cost::Column::DeletedAt.is_null());
        }

        let entities = select
            .order_by_asc(entity::feature_cost::Column::FeatureKey)
            .order_by_desc(entity::feature_cost::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(FeatureCost::from_entity).collect())
    }

    pub async fn create(&self, param: CreateFeatureCostParam) -> Result<FeatureCost, DbErr> {
        let now = Utc::now();
        let entity = entity::feature_cost::ActiveModel {
            feature_key: ActiveValue::Set(param.feature_key),
            display_name: ActiveValue::Set(param.display_name),
            description: ActiveValue::Set(param.description),
            cost: ActiveValue::Set(param.cost),
            deleted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(FeatureCost::from_entity(entity))
    }

    /// Updates an active cost row.
    ///
    /// # Returns
    /// - `Ok(None)` - No active row with that ID
    pub async fn update(
        &self,
        id: i32,
        param: UpdateFeatureCostParam,
    ) -> Result<Option<FeatureCost>, DbErr> {
        let Some(entity) = self.find_active_entity(id).await? else {
            return Ok(None);
        };

        let mut active: entity::feature_cost::ActiveModel = entity.into();
        active.display_name = ActiveValue::Set(param.display_name);
        active.description = ActiveValue::Set(param.description);
        active.cost = ActiveValue::Set(param.cost);
        active.updated_at = ActiveValue::Set(Utc::now());
        let updated = active.update(self.db).await?;

        Ok(Some(FeatureCost::from_entity(updated)))
    }

    /// Stamps `deleted_at` on an active row.
    ///
    /// # Returns
    /// - `Ok(false)` - No active row with that ID
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let Some(entity) = self.find_active_entity(id).await? else {
            return Ok(false);
        };

        let now = Utc::now();
        let mut active: entity::feature_cost::ActiveModel = entity.into();
        active.deleted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await?;

        Ok(true)
    }

    async fn find_active_entity(
        &self,
        id: i32,
    ) -> Result<Option<entity::feature_cost::Model>, DbErr> {
        entity::prelude::FeatureCost::find_by_id(id)
            .filter(entity::feature_cost::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }
}
