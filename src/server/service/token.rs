//! Balance, ledger history and the stub purchase flow.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        token_ledger::TokenLedgerRepository, token_purchase::TokenPurchaseRepository,
        user::UserRepository,
    },
    error::{ledger::LedgerError, AppError},
    model::token::{
        LedgerEntry, LedgerKind, Purchase, PurchaseStatus, TokenPackage, TOKEN_PACKAGES,
    },
    service::ledger::Ledger,
    util::pagination::{Page, PaginationParams},
};

pub struct TokenService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn balance(&self, user_id: i32) -> Result<i64, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(LedgerError::UserNotFound(user_id))?;

        Ok(user.token_balance)
    }

    /// Gets the user's ledger, newest first.
    pub async fn ledger(
        &self,
        user_id: i32,
        params: PaginationParams,
    ) -> Result<Page<LedgerEntry>, AppError> {
        Ok(TokenLedgerRepository::new(self.db)
            .get_by_user_paginated(user_id, params)
            .await?)
    }

    pub fn packages(&self) -> Vec<TokenPackage> {
        TOKEN_PACKAGES.to_vec()
    }

    /// Records a pending purchase of a fixed package.
    ///
    /// No payment is taken. Tokens are only credited once an admin completes it.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Unknown package key
    pub async fn purchase(&self, user_id: i32, package_key: &str) -> Result<Purchase, AppError> {
        let package = TokenPackage::find(package_key)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown package '{}'", package_key)))?;

        let purchase = TokenPurchaseRepository::new(self.db)
            .create(user_id, package)
            .await?;

        tracing::info!(
            user_id,
            purchase_id = purchase.id,
            package = package.key,
            "Recorded pending token purchase"
        );

        Ok(purchase)
    }

    pub async fn purchases(&self, user_id: i32) -> Result<Vec<Purchase>, AppError> {
        Ok(TokenPurchaseRepository::new(self.db)
            .get_by_user(user_id)
            .await?)
    }

    pub async fn all_purchases(
        &self,
        status: Option<PurchaseStatus>,
    ) -> Result<Vec<Purchase>, AppError> {
        Ok(TokenPurchaseRepository::new(self.db).get_all(status).await?)
    }

    /// Applies an admin balance correction.
    pub async fn adjust(
        &self,
        user_id: i32,
        amount: i64,
        note: Option<String>,
    ) -> Result<LedgerEntry, AppError> {
        let txn = self.db.begin().await?;
        let entry = Ledger::new(&txn).adjust(user_id, amount, note).await?;
        txn.commit().await?;

        Ok(entry)
    }

    /// Completes a pending purchase and credits its tokens.
    ///
    /// The credit and the status change commit together.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown purchase
    /// - `Err(AppError::Conflict)` - Purchase no longer pending
    pub async fn complete_purchase(&self, purchase_id: i32) -> Result<Purchase, AppError> {
        let txn = self.db.begin().await?;
        let purchases = TokenPurchaseRepository::new(&txn);

        let purchase = purchases
            .find_by_id(purchase_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Purchase not found".to_string()))?;

        if !purchase.is_pending() {
            return Err(AppError::Conflict(format!(
                "Purchase is already {}",
                purchase.status
            )));
        }

        let entry = Ledger::new(&txn)
            .credit(
                purchase.user_id,
                purchase.tokens,
                LedgerKind::Purchase,
                Some(format!("purchase:{}", purchase.id)),
                Some(format!("Package {}", purchase.package_key)),
            )
            .await?;

        if !purchases
            .resolve(purchase.id, PurchaseStatus::Completed, Some(entry.id))
            .await?
        {
            return Err(AppError::Conflict("Purchase is no longer pending".to_string()));
        }

        let completed = purchases
            .find_by_id(purchase.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Purchase not found".to_string()))?;

        txn.commit().await?;

        tracing::info!(purchase_id, user_id = completed.user_id, "Completed token purchase");

        Ok(completed)
    }

    /// Cancels a pending purchase without touching the balance.
    pub async fn cancel_purchase(&self, purchase_id: i32) -> Result<Purchase, AppError> {
        let purchases = TokenPurchaseRepository::new(self.db);

        let purchase = purchases
            .find_by_id(purchase_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Purchase not found".to_string()))?;

        if !purchases
            .resolve(purchase.id, PurchaseStatus::Cancelled, None)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Purchase is already {}",
                purchase.status
            )));
        }

        tracing::info!(purchase_id, "Cancelled token purchase");

        purchases
            .find_by_id(purchase_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Purchase not found".to_string()))
    }
}
