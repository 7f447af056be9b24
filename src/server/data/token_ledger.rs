//! Append-only token ledger repository.
//!
//! Entries are only ever inserted. There are deliberately no update or delete methods.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    model::token::{LedgerEntry, NewLedgerEntry},
    util::pagination::{Page, PaginationParams},
};

pub struct TokenLedgerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TokenLedgerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn insert(&self, entry: NewLedgerEntry) -> Result<LedgerEntry, DbErr> {
        let entity = entity::token_ledger::ActiveModel {
            user_id: ActiveValue::Set(entry.user_id),
            delta: ActiveValue::Set(entry.delta),
            balance_after: ActiveValue::Set(entry.balance_after),
            kind: ActiveValue::Set(entry.kind.as_str().to_string()),
            feature_cost_id: ActiveValue::Set(entry.feature_cost_id),
            reference: ActiveValue::Set(entry.reference),
            note: ActiveValue::Set(entry.note),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(LedgerEntry::from_entity(entity))
    }

    /// Gets a user's entries, newest first.
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        params: PaginationParams,
    ) -> Result<Page<LedgerEntry>, DbErr> {
        let select = entity::prelude::TokenLedger::find()
            .filter(entity::token_ledger::Column::UserId.eq(user_id))
            .order_by_desc(entity::token_ledger::Column::Id);

        let page = super::fetch_page(self.db, select, params).await?;

        Ok(page.map(LedgerEntry::from_entity))
    }
}
