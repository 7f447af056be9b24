use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        army::{ArmyDto, CreateArmyDto, PaginatedArmiesDto, UpdateArmyDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::army::{armies_page_into_dto, ArmyParam, GalleryFilter},
        service::army::ArmyService,
        state::AppState,
        util::pagination::{default_entries, PaginationParams},
    },
};

/// Tag for grouping army endpoints in OpenAPI documentation
pub static ARMY_TAG: &str = "army";

/// Query parameters of the public galleries.
///
/// Kept flat instead of flattening `PaginationParams`, which urlencoded deserialization
/// cannot do for numeric fields.
#[derive(Deserialize)]
pub struct GalleryParams {
    pub faction_id: Option<i32>,
    pub detachment_id: Option<i32>,
    pub q: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl GalleryParams {
    pub fn into_parts(self) -> (GalleryFilter, PaginationParams) {
        (
            GalleryFilter {
                faction_id: self.faction_id,
                detachment_id: self.detachment_id,
                query: self.q,
            },
            PaginationParams::new(self.page, self.entries),
        )
    }
}

/// Lists the logged-in user's armies, newest first.
#[utoipa::path(
    get,
    path = "/api/me/armies",
    tag = ARMY_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page"),
        ("entries" = Option<u64>, Query, description = "Entries per page")
    ),
    responses(
        (status = 200, description = "Own armies", body = PaginatedArmiesDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn list_own_armies(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let page = ArmyService::new(&state.db).list_own(user.id, params).await?;

    Ok((StatusCode::OK, Json(armies_page_into_dto(page))))
}

/// Public army gallery.
///
/// # Arguments
/// - `q` - Case-insensitive substring of the army name
#[utoipa::path(
    get,
    path = "/api/armies",
    tag = ARMY_TAG,
    params(
        ("faction_id" = Option<i32>, Query, description = "Filter by faction"),
        ("detachment_id" = Option<i32>, Query, description = "Filter by detachment"),
        ("q" = Option<String>, Query, description = "Name search"),
        ("page" = Option<u64>, Query, description = "Zero-based page"),
        ("entries" = Option<u64>, Query, description = "Entries per page")
    ),
    responses(
        (status = 200, description = "Public armies", body = PaginatedArmiesDto)
    ),
)]
pub async fn army_gallery(
    State(state): State<AppState>,
    Query(params): Query<GalleryParams>,
) -> Result<impl IntoResponse, AppError> {
    let (filter, pagination) = params.into_parts();

    let page = ArmyService::new(&state.db)
        .gallery(filter, pagination)
        .await?;

    Ok((StatusCode::OK, Json(armies_page_into_dto(page))))
}

/// Gets an army that is public or owned by the caller.
#[utoipa::path(
    get,
    path = "/api/armies/{army_id}",
    tag = ARMY_TAG,
    params(("army_id" = i32, Path, description = "Army ID")),
    responses(
        (status = 200, description = "Army", body = ArmyDto),
        (status = 404, description = "Army not found or private", body = ErrorDto)
    ),
)]
pub async fn get_army(
    State(state): State<AppState>,
    session: Session,
    Path(army_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let army = ArmyService::new(&state.db)
        .get(army_id, viewer.map(|u| u.id))
        .await?;

    Ok((StatusCode::OK, Json(army.into_dto())))
}

/// Creates an army list.
///
/// # Returns
/// - `201 Created` - New army
/// - `400 Bad Request` - Blank name, points out of range, unknown faction or a
///   detachment from another faction
#[utoipa::path(
    post,
    path = "/api/armies",
    tag = ARMY_TAG,
    request_body = CreateArmyDto,
    responses(
        (status = 201, description = "Created army", body = ArmyDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn create_army(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateArmyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let army = ArmyService::new(&state.db)
        .create(user.id, ArmyParam::from_create_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(army.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/armies/{army_id}",
    tag = ARMY_TAG,
    params(("army_id" = i32, Path, description = "Army ID")),
    request_body = UpdateArmyDto,
    responses(
        (status = 200, description = "Updated army", body = ArmyDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 404, description = "Army not found", body = ErrorDto)
    ),
)]
pub async fn update_army(
    State(state): State<AppState>,
    session: Session,
    Path(army_id): Path<i32>,
    Json(payload): Json<UpdateArmyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let army = ArmyService::new(&state.db)
        .update(user.id, army_id, ArmyParam::from_update_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(army.into_dto())))
}

/// Deletes an army. Briefs generated from it are kept without the army link.
#[utoipa::path(
    delete,
    path = "/api/armies/{army_id}",
    tag = ARMY_TAG,
    params(("army_id" = i32, Path, description = "Army ID")),
    responses(
        (status = 204, description = "Army deleted"),
        (status = 404, description = "Army not found", body = ErrorDto)
    ),
)]
pub async fn delete_army(
    State(state): State<AppState>,
    session: Session,
    Path(army_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ArmyService::new(&state.db).delete(user.id, army_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
