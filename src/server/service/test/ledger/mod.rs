use crate::server::{
    error::{ledger::LedgerError, AppError},
    model::token::LedgerKind,
    service::ledger::Ledger,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod adjust;
mod credit;
mod debit;
