use crate::server::{
    data::dossier::DossierRepository,
    model::{army::GalleryFilter, version::VersionSource},
    util::pagination::PaginationParams,
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod clear_army;
mod get_public_paginated;
mod versions;
