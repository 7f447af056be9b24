use crate::server::{
    error::AppError,
    model::token::{LedgerKind, PurchaseStatus},
    service::token::TokenService,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod complete_purchase;
mod purchase;
