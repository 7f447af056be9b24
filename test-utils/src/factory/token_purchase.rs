use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating purchase records.
pub struct TokenPurchaseFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> TokenPurchaseFactory<'a> {
    /// Defaults: `starter` package, pending, created now.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::token_purchase::Model, DbErr> {
        let resolved_at = (self.status != "pending").then(Utc::now);
        entity::token_purchase::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            package_key: ActiveValue::Set("starter".to_string()),
            tokens: ActiveValue::Set(50),
            price_cents: ActiveValue::Set(499),
            status: ActiveValue::Set(self.status),
            ledger_entry_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            resolved_at: ActiveValue::Set(resolved_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_token_purchase(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::token_purchase::Model, DbErr> {
    TokenPurchaseFactory::new(db, user_id).build().await
}
