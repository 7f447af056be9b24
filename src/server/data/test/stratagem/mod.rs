use crate::server::{
    data::stratagem::StratagemRepository,
    model::stratagem::{Phase, StratagemFilter},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod name_taken;
mod search;
