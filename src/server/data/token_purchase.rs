use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::token::{Purchase, PurchaseStatus, TokenPackage};

pub struct TokenPurchaseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TokenPurchaseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a pending purchase of `package`, copying its price at this moment.
    pub async fn create(&self, user_id: i32, package: TokenPackage) -> Result<Purchase, DbErr> {
        let entity = entity::token_purchase::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            package_key: ActiveValue::Set(package.key.to_string()),
            tokens: ActiveValue::Set(package.tokens),
            price_cents: ActiveValue::Set(package.price_cents),
            status: ActiveValue::Set(PurchaseStatus::Pending.as_str().to_string()),
            ledger_entry_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            resolved_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Purchase::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Purchase>, DbErr> {
        let entity = entity::prelude::TokenPurchase::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Purchase::from_entity))
    }

    /// Gets a user's purchases, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Purchase>, DbErr> {
        let entities = entity::prelude::TokenPurchase::find()
            .filter(entity::token_purchase::Column::UserId.eq(user_id))
            .order_by_desc(entity::token_purchase::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Purchase::from_entity).collect())
    }

    /// Gets all purchases, optionally filtered by status, newest first.
    pub async fn get_all(&self, status: Option<PurchaseStatus>) -> Result<Vec<Purchase>, DbErr> {
        let mut select = entity::prelude::TokenPurchase::find();

        if let Some(status) = status {
            select = select.filter(entity::token_purchase::Column::Status.eq(status.as_str()));
        }

        let entities = select
            .order_by_desc(entity::token_purchase::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Purchase::from_entity).collect())
    }

    /// Moves a purchase out of `pending`.
    ///
    /// The status check is part of the `UPDATE`, so two concurrent resolutions of the
    /// same purchase cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(true)` - Purchase was pending and is now resolved
    /// - `Ok(false)` - Purchase missing or no longer pending
    pub async fn resolve(
        &self,
        id: i32,
        status: PurchaseStatus,
        ledger_entry_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::TokenPurchase::update_many()
            .set(entity::token_purchase::ActiveModel {
                status: ActiveValue::Set(status.as_str().to_string()),
                ledger_entry_id: ActiveValue::Set(ledger_entry_id),
                resolved_at: ActiveValue::Set(Some(Utc::now())),
                ..Default::default()
            })
            .filter(entity::token_purchase::Column::Id.eq(id))
            .filter(entity::token_purchase::Column::Status.eq(PurchaseStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Cancels every purchase still pending that was created before `cutoff`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of purchases cancelled
    pub async fn cancel_pending_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::TokenPurchase::update_many()
            .set(entity::token_purchase::ActiveModel {
                status: ActiveValue::Set(PurchaseStatus::Cancelled.as_str().to_string()),
                resolved_at: ActiveValue::Set(Some(Utc::now())),
                ..Default::default()
            })
            .filter(entity::token_purchase::Column::Status.eq(PurchaseStatus::Pending.as_str()))
            .filter(entity::token_purchase::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
