use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BalanceDto {
    pub balance: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct LedgerEntryDto {
    pub id: i32,
    pub delta: i64,
    pub balance_after: i64,
    pub kind: String,
    pub feature_cost_id: Option<i32>,
    pub reference: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedLedgerDto {
    pub entries: Vec<LedgerEntryDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TokenPackageDto {
    pub key: String,
    pub tokens: i64,
    pub price_cents: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PurchaseRequestDto {
    pub package: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PurchaseDto {
    pub id: i32,
    pub user_id: i32,
    pub package_key: String,
    pub tokens: i64,
    pub price_cents: i64,
    pub status: String,
    pub ledger_entry_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Signed manual balance change applied by an admin.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AdjustTokensDto {
    pub amount: i64,
    #[serde(default)]
    pub note: Option<String>,
}
