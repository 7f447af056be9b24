use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DatasheetDto {
    pub id: i32,
    pub faction_id: i32,
    pub name: String,
    pub role: String,
    pub keywords: Vec<String>,
    pub is_enabled: bool,
    pub current_version: i32,
    #[schema(value_type = Object)]
    pub profile: serde_json::Value,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DatasheetVersionDto {
    pub version: i32,
    #[schema(value_type = Object)]
    pub profile: serde_json::Value,
    pub source: String,
    pub note: Option<String>,
    pub is_current: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateDatasheetDto {
    pub faction_id: i32,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[schema(value_type = Object)]
    pub profile: serde_json::Value,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdateDatasheetProfileDto {
    #[schema(value_type = Object)]
    pub profile: serde_json::Value,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SetEnabledDto {
    pub enabled: bool,
}
