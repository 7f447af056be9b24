//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user upserts at login, admin status management and the guarded balance
//! update used by the token ledger.

use crate::server::{
    model::user::{UpsertUserParam, UpsertedUser, User},
    util::pagination::{Page, PaginationParams},
};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts a user from parameter model.
    ///
    /// Inserts a new user or updates an existing user's name, login timestamp and
    /// optionally their admin status. The admin status is only updated if explicitly
    /// provided (Some value), preventing accidental removal of admin privileges during
    /// regular login operations. Run inside a transaction so `created` is reliable.
    ///
    /// # Returns
    /// - `Ok(UpsertedUser)` - The stored user and whether this call created it
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<UpsertedUser, DbErr> {
        let existed = entity::prelude::User::find()
            .filter(entity::user::Column::DiscordId.eq(&param.discord_id))
            .one(self.db)
            .await?
            .is_some();

        let mut update_columns = vec![
            entity::user::Column::Name,
            entity::user::Column::LastLoginAt,
        ];

        if param.is_admin.is_some() {
            update_columns.push(entity::user::Column::Admin);
        }

        let now = Utc::now();
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id),
            name: ActiveValue::Set(param.name),
            admin: ActiveValue::Set(param.is_admin.unwrap_or(false)),
            token_balance: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            last_login_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(UpsertedUser {
            user: User::from_entity(entity),
            created: !existed,
        })
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether a bootstrap admin code is needed.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets all users with pagination, ordered alphabetically by name.
    pub async fn get_all_paginated(&self, params: PaginationParams) -> Result<Page<User>, DbErr> {
        let select = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id);

        let page = super::fetch_page(self.db, select, params).await?;

        Ok(page.map(User::from_entity))
    }

    /// Sets or revokes admin status.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    pub async fn set_admin(&self, user_id: i32, is_admin: bool) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        active.admin = ActiveValue::Set(is_admin);
        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Adds `delta` to the user's balance unless the result would be negative.
    ///
    /// The check happens in the `UPDATE` itself so concurrent debits cannot overdraw.
    ///
    /// # Returns
    /// - `Ok(Some(balance))` - Change applied, returns the new balance
    /// - `Ok(None)` - User missing or balance too low; nothing changed
    pub async fn apply_balance_delta(&self, user_id: i32, delta: i64) -> Result<Option<i64>, DbErr> {
        let required = delta.min(0).saturating_neg();

        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::TokenBalance,
                sea_orm::sea_query::ExprTrait::add(
                    Expr::col(entity::user::Column::TokenBalance),
                    delta,
                ),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(entity::user::Column::TokenBalance.gte(required))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let balance = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
            .map(|u| u.token_balance);

        Ok(balance)
    }
}
