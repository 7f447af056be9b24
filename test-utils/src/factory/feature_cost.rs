use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating feature cost rows.
///
/// # Example
///
/// ```rust,ignore
/// let cost = FeatureCostFactory::new(&db)
///     .feature_key("brief_generation")
///     .cost(5)
///     .build()
///     .await?;
/// ```
pub struct FeatureCostFactory<'a> {
    db: &'a DatabaseConnection,
    feature_key: String,
    cost: i64,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> FeatureCostFactory<'a> {
    /// Defaults: key `"feature_{id}"`, cost 1, active.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            feature_key: format!("feature_{}", next_id()),
            cost: 1,
            deleted_at: None,
        }
    }

    pub fn feature_key(mut self, feature_key: impl Into<String>) -> Self {
        self.feature_key = feature_key.into();
        self
    }

    pub fn cost(mut self, cost: i64) -> Self {
        self.cost = cost;
        self
    }

    /// Marks the row as soft-deleted at the current time.
    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(Utc::now());
        self
    }

    pub async fn build(self) -> Result<entity::feature_cost::Model, DbErr> {
        let now = Utc::now();
        entity::feature_cost::ActiveModel {
            display_name: ActiveValue::Set(self.feature_key.replace('_', " ")),
            feature_key: ActiveValue::Set(self.feature_key),
            description: ActiveValue::Set(None),
            cost: ActiveValue::Set(self.cost),
            deleted_at: ActiveValue::Set(self.deleted_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active feature cost for `feature_key`.
pub async fn create_feature_cost(
    db: &DatabaseConnection,
    feature_key: &str,
    cost: i64,
) -> Result<entity::feature_cost::Model, DbErr> {
    FeatureCostFactory::new(db)
        .feature_key(feature_key)
        .cost(cost)
        .build()
        .await
}
