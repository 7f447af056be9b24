use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full brief with the content of its current version.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BriefDto {
    pub id: i32,
    pub user_id: i32,
    pub army_id: Option<i32>,
    pub faction_id: i32,
    pub detachment_id: Option<i32>,
    pub title: String,
    pub is_public: bool,
    pub current_version: i32,
    pub content: String,
    /// `content` rendered from markdown.
    pub content_html: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BriefSummaryDto {
    pub id: i32,
    pub user_id: i32,
    pub faction_id: i32,
    pub detachment_id: Option<i32>,
    pub title: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedBriefsDto {
    pub briefs: Vec<BriefSummaryDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BriefVersionDto {
    pub version: i32,
    pub content: String,
    /// One of `legacy`, `generated`, `edited`.
    pub source: String,
    pub ledger_entry_id: Option<i32>,
    pub is_current: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateBriefDto {
    pub army_id: i32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_public: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdateBriefContentDto {
    pub content: String,
}
