//! Token ledger, purchase and package models.

use chrono::{DateTime, Utc};

use crate::{
    model::token::{LedgerEntryDto, PaginatedLedgerDto, PurchaseDto, TokenPackageDto},
    server::util::pagination::Page,
};

/// Reason recorded on a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerKind {
    SignupGrant,
    FeatureDebit,
    Purchase,
    AdminAdjustment,
}

impl LedgerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignupGrant => "signup_grant",
            Self::FeatureDebit => "feature_debit",
            Self::Purchase => "purchase",
            Self::AdminAdjustment => "admin_adjustment",
        }
    }
}

/// Immutable record of a single balance change.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub id: i32,
    pub user_id: i32,
    pub delta: i64,
    pub balance_after: i64,
    pub kind: String,
    pub feature_cost_id: Option<i32>,
    pub reference: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn from_entity(entity: entity::token_ledger::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            delta: entity.delta,
            balance_after: entity.balance_after,
            kind: entity.kind,
            feature_cost_id: entity.feature_cost_id,
            reference: entity.reference,
            note: entity.note,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> LedgerEntryDto {
        LedgerEntryDto {
            id: self.id,
            delta: self.delta,
            balance_after: self.balance_after,
            kind: self.kind,
            feature_cost_id: self.feature_cost_id,
            reference: self.reference,
            note: self.note,
            created_at: self.created_at,
        }
    }
}

pub fn ledger_page_into_dto(page: Page<LedgerEntry>) -> PaginatedLedgerDto {
    PaginatedLedgerDto {
        entries: page.items.into_iter().map(LedgerEntry::into_dto).collect(),
        total: page.total,
        page: page.page,
        per_page: page.per_page,
        total_pages: page.total_pages,
    }
}

/// Fields of a ledger entry about to be written.
#[derive(Debug, Clone)]
pub struct NewLedgerEntry {
    pub user_id: i32,
    pub delta: i64,
    pub balance_after: i64,
    pub kind: LedgerKind,
    pub feature_cost_id: Option<i32>,
    pub reference: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseStatus {
    Pending,
    Completed,
    Cancelled,
}

impl PurchaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// Token purchase recorded by the stub checkout flow.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
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

impl Purchase {
    pub fn from_entity(entity: entity::token_purchase::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            package_key: entity.package_key,
            tokens: entity.tokens,
            price_cents: entity.price_cents,
            status: entity.status,
            ledger_entry_id: entity.ledger_entry_id,
            created_at: entity.created_at,
            resolved_at: entity.resolved_at,
        }
    }

    pub fn into_dto(self) -> PurchaseDto {
        PurchaseDto {
            id: self.id,
            user_id: self.user_id,
            package_key: self.package_key,
            tokens: self.tokens,
            price_cents: self.price_cents,
            status: self.status,
            ledger_entry_id: self.ledger_entry_id,
            created_at: self.created_at,
            resolved_at: self.resolved_at,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == PurchaseStatus::Pending.as_str()
    }
}

/// Fixed token bundle offered for purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPackage {
    pub key: &'static str,
    pub tokens: i64,
    pub price_cents: i64,
}

pub const TOKEN_PACKAGES: [TokenPackage; 3] = [
    TokenPackage {
        key: "starter",
        tokens: 50,
        price_cents: 499,
    },
    TokenPackage {
        key: "standard",
        tokens: 120,
        price_cents: 999,
    },
    TokenPackage {
        key: "bulk",
        tokens: 300,
        price_cents: 1999,
    },
];

impl TokenPackage {
    pub fn find(key: &str) -> Option<Self> {
        TOKEN_PACKAGES.iter().copied().find(|p| p.key == key)
    }

    pub fn into_dto(self) -> TokenPackageDto {
        TokenPackageDto {
            key: self.key.to_string(),
            tokens: self.tokens,
            price_cents: self.price_cents,
        }
    }
}
