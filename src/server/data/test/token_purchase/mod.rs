use crate::server::{data::token_purchase::TokenPurchaseRepository, model::token::PurchaseStatus};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod cancel_pending_before;
mod resolve;
