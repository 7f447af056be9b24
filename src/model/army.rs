use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ArmyDto {
    pub id: i32,
    pub user_id: i32,
    pub faction_id: i32,
    pub detachment_id: Option<i32>,
    pub name: String,
    pub points: i32,
    pub list_text: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateArmyDto {
    pub name: String,
    pub faction_id: i32,
    #[serde(default)]
    pub detachment_id: Option<i32>,
    pub points: i32,
    #[serde(default)]
    pub list_text: String,
    #[serde(default)]
    pub is_public: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdateArmyDto {
    pub name: String,
    pub faction_id: i32,
    #[serde(default)]
    pub detachment_id: Option<i32>,
    pub points: i32,
    #[serde(default)]
    pub list_text: String,
    pub is_public: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedArmiesDto {
    pub armies: Vec<ArmyDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
