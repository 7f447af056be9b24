use crate::server::{
    data::army::ArmyRepository,
    model::army::GalleryFilter,
    util::pagination::{PaginationParams, MAX_PAGE},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_public_paginated;
