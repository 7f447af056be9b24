use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FeatureCostDto {
    pub id: i32,
    pub feature_key: String,
    pub display_name: String,
    pub description: Option<String>,
    pub cost: i64,
    /// Set when the cost was soft-deleted. Only visible on the admin listing.
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateFeatureCostDto {
    pub feature_key: String,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub cost: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdateFeatureCostDto {
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub cost: i64,
}
