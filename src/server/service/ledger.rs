//! Token ledger operations.
//!
//! Every balance change goes through [`Ledger`]: the guarded balance update and the ledger
//! insert run on the same connection, so callers passing a transaction get both or
//! neither. Entries are never updated or deleted, and the sum of a user's deltas always
//! equals their balance.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{
        feature_cost::FeatureCostRepository, token_ledger::TokenLedgerRepository,
        user::UserRepository,
    },
    error::{ledger::LedgerError, AppError},
    model::{
        feature_cost::FeatureCost,
        token::{LedgerEntry, LedgerKind, NewLedgerEntry},
    },
};

/// Balance mutations for a single connection or transaction.
pub struct Ledger<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> Ledger<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Read-only check that `user_id` can currently pay for `feature_key`.
    ///
    /// Used before calling out to the brief generator so a user who cannot pay never
    /// triggers the external request. The real debit still re-checks in the database.
    ///
    /// # Returns
    /// - `Ok(FeatureCost)` - Active cost the user can afford
    /// - `Err(LedgerError::UnknownFeature)` - No active cost for the key
    /// - `Err(LedgerError::InsufficientBalance)` - Balance below the cost
    /// - `Err(LedgerError::UserNotFound)` - No such user
    pub async fn ensure_affordable(
        &self,
        user_id: i32,
        feature_key: &str,
    ) -> Result<FeatureCost, AppError> {
        let cost = self.active_cost(feature_key).await?;

        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(LedgerError::UserNotFound(user_id))?;

        if user.token_balance < cost.cost {
            return Err(LedgerError::InsufficientBalance {
                required: cost.cost,
                available: user.token_balance,
            }
            .into());
        }

        Ok(cost)
    }

    /// Charges the active cost of `feature_key` to the user.
    ///
    /// A zero-cost feature still records a zero-delta entry so usage stays auditable.
    ///
    /// # Arguments
    /// - `reference` - Free-form pointer to what was paid for, e.g. `dossier:12`
    ///
    /// # Returns
    /// - `Ok(LedgerEntry)` - Entry of kind `feature_debit` linked to the feature cost
    /// - `Err(LedgerError::UnknownFeature)` - Missing or soft-deleted cost
    /// - `Err(LedgerError::InsufficientBalance)` - Balance below the cost
    pub async fn debit(
        &self,
        user_id: i32,
        feature_key: &str,
        reference: Option<String>,
    ) -> Result<LedgerEntry, AppError> {
        let cost = self.active_cost(feature_key).await?;

        let balance_after = self.apply(user_id, -cost.cost).await?;

        let entry = TokenLedgerRepository::new(self.db)
            .insert(NewLedgerEntry {
                user_id,
                delta: -cost.cost,
                balance_after,
                kind: LedgerKind::FeatureDebit,
                feature_cost_id: Some(cost.id),
                reference,
                note: None,
            })
            .await?;

        tracing::info!(
            user_id,
            feature = feature_key,
            cost = cost.cost,
            balance_after,
            "Debited tokens"
        );

        Ok(entry)
    }

    /// Adds a positive amount to the user's balance.
    ///
    /// # Returns
    /// - `Err(LedgerError::InvalidAmount)` - `amount` is zero or negative
    /// - `Err(LedgerError::UserNotFound)` - No such user
    pub async fn credit(
        &self,
        user_id: i32,
        amount: i64,
        kind: LedgerKind,
        reference: Option<String>,
        note: Option<String>,
    ) -> Result<LedgerEntry, AppError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount(amount).into());
        }

        let balance_after = self.apply(user_id, amount).await?;

        let entry = TokenLedgerRepository::new(self.db)
            .insert(NewLedgerEntry {
                user_id,
                delta: amount,
                balance_after,
                kind,
                feature_cost_id: None,
                reference,
                note,
            })
            .await?;

        tracing::info!(
            user_id,
            amount,
            kind = kind.as_str(),
            balance_after,
            "Credited tokens"
        );

        Ok(entry)
    }

    /// Applies a signed admin correction.
    ///
    /// # Returns
    /// - `Err(LedgerError::InvalidAmount)` - `amount` is zero
    /// - `Err(LedgerError::InsufficientBalance)` - Would drive the balance negative
    pub async fn adjust(
        &self,
        user_id: i32,
        amount: i64,
        note: Option<String>,
    ) -> Result<LedgerEntry, AppError> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount(amount).into());
        }

        let balance_after = self.apply(user_id, amount).await?;

        let entry = TokenLedgerRepository::new(self.db)
            .insert(NewLedgerEntry {
                user_id,
                delta: amount,
                balance_after,
                kind: LedgerKind::AdminAdjustment,
                feature_cost_id: None,
                reference: None,
                note,
            })
            .await?;

        tracing::info!(user_id, amount, balance_after, "Adjusted token balance");

        Ok(entry)
    }

    async fn active_cost(&self, feature_key: &str) -> Result<FeatureCost, AppError> {
        FeatureCostRepository::new(self.db)
            .find_active_by_key(feature_key)
            .await?
            .ok_or_else(|| LedgerError::UnknownFeature(feature_key.to_string()).into())
    }

    /// Applies `delta` with the database-side guard and explains a refusal.
    async fn apply(&self, user_id: i32, delta: i64) -> Result<i64, AppError> {
        let users = UserRepository::new(self.db);

        if let Some(balance) = users.apply_balance_delta(user_id, delta).await? {
            return Ok(balance);
        }

        match users.find_by_id(user_id).await? {
            None => Err(LedgerError::UserNotFound(user_id).into()),
            Some(user) => Err(LedgerError::InsufficientBalance {
                required: -delta,
                available: user.token_balance,
            }
            .into()),
        }
    }
}
