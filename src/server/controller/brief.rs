use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SetCurrentVersionDto, SetVisibilityDto},
        brief::{
            BriefDto, BriefVersionDto, CreateBriefDto, PaginatedBriefsDto, UpdateBriefContentDto,
        },
    },
    server::{
        controller::army::GalleryParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::dossier::{brief_version_into_dto, briefs_page_into_dto},
        service::dossier::DossierService,
        state::AppState,
        util::pagination::PaginationParams,
    },
};

/// Tag for grouping brief endpoints in OpenAPI documentation
pub static BRIEF_TAG: &str = "brief";

/// Generates a brief for one of the caller's armies.
///
/// The caller is charged the `brief_generation` cost only when generation succeeds. The
/// balance is checked before the generator runs so a short balance never triggers a
/// paid upstream call.
///
/// # Access Control
/// - Logged in, owner of the army
///
/// # Returns
/// - `201 Created` - Brief with version 1
/// - `402 Payment Required` - Balance below the generation cost
/// - `404 Not Found` - Army not found, or the feature has no active price
/// - `502 Bad Gateway` - Generator failed
/// - `503 Service Unavailable` - Generator not configured
#[utoipa::path(
    post,
    path = "/api/briefs",
    tag = BRIEF_TAG,
    request_body = CreateBriefDto,
    responses(
        (status = 201, description = "Generated brief", body = BriefDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 402, description = "Insufficient tokens", body = ErrorDto),
        (status = 404, description = "Army or feature cost not found", body = ErrorDto),
        (status = 502, description = "Generation failed", body = ErrorDto),
        (status = 503, description = "Generator not configured", body = ErrorDto)
    ),
)]
pub async fn create_brief(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBriefDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let brief = DossierService::new(&state.db, state.brief_generator.as_ref())
        .create(user.id, payload.army_id, payload.title, payload.is_public)
        .await?;

    Ok((StatusCode::CREATED, Json(brief.into_dto()?)))
}

/// Generates a new version of a brief, charged as `brief_regeneration`.
///
/// # Returns
/// - `200 OK` - Brief showing the new version
/// - `402 Payment Required` - Balance below the regeneration cost
/// - `409 Conflict` - The army was deleted
#[utoipa::path(
    post,
    path = "/api/briefs/{brief_id}/regenerate",
    tag = BRIEF_TAG,
    params(("brief_id" = i32, Path, description = "Brief ID")),
    responses(
        (status = 200, description = "Regenerated brief", body = BriefDto),
        (status = 402, description = "Insufficient tokens", body = ErrorDto),
        (status = 404, description = "Brief not found", body = ErrorDto),
        (status = 409, description = "Army no longer exists", body = ErrorDto),
        (status = 502, description = "Generation failed", body = ErrorDto)
    ),
)]
pub async fn regenerate_brief(
    State(state): State<AppState>,
    session: Session,
    Path(brief_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let brief = DossierService::new(&state.db, state.brief_generator.as_ref())
        .regenerate(user.id, brief_id)
        .await?;

    Ok((StatusCode::OK, Json(brief.into_dto()?)))
}

#[utoipa::path(
    put,
    path = "/api/briefs/{brief_id}/content",
    tag = BRIEF_TAG,
    params(("brief_id" = i32, Path, description = "Brief ID")),
    request_body = UpdateBriefContentDto,
    responses(
        (status = 200, description = "Brief showing the edited version", body = BriefDto),
        (status = 400, description = "Empty content", body = ErrorDto),
        (status = 404, description = "Brief not found", body = ErrorDto)
    ),
)]
pub async fn edit_brief(
    State(state): State<AppState>,
    session: Session,
    Path(brief_id): Path<i32>,
    Json(payload): Json<UpdateBriefContentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let brief = DossierService::new(&state.db, state.brief_generator.as_ref())
        .edit(user.id, brief_id, payload.content)
        .await?;

    Ok((StatusCode::OK, Json(brief.into_dto()?)))
}

/// Points the brief at an earlier version without creating a new one.
#[utoipa::path(
    put,
    path = "/api/briefs/{brief_id}/current",
    tag = BRIEF_TAG,
    params(("brief_id" = i32, Path, description = "Brief ID")),
    request_body = SetCurrentVersionDto,
    responses(
        (status = 200, description = "Brief showing the selected version", body = BriefDto),
        (status = 404, description = "Brief or version not found", body = ErrorDto)
    ),
)]
pub async fn set_current_version(
    State(state): State<AppState>,
    session: Session,
    Path(brief_id): Path<i32>,
    Json(payload): Json<SetCurrentVersionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let brief = DossierService::new(&state.db, state.brief_generator.as_ref())
        .set_current(user.id, brief_id, payload.version)
        .await?;

    Ok((StatusCode::OK, Json(brief.into_dto()?)))
}

#[utoipa::path(
    put,
    path = "/api/briefs/{brief_id}/visibility",
    tag = BRIEF_TAG,
    params(("brief_id" = i32, Path, description = "Brief ID")),
    request_body = SetVisibilityDto,
    responses(
        (status = 200, description = "Updated brief", body = BriefDto),
        (status = 404, description = "Brief not found", body = ErrorDto)
    ),
)]
pub async fn set_visibility(
    State(state): State<AppState>,
    session: Session,
    Path(brief_id): Path<i32>,
    Json(payload): Json<SetVisibilityDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let brief = DossierService::new(&state.db, state.brief_generator.as_ref())
        .set_visibility(user.id, brief_id, payload.is_public)
        .await?;

    Ok((StatusCode::OK, Json(brief.into_dto()?)))
}

/// Gets a public or owned brief with its current content as markdown and HTML.
#[utoipa::path(
    get,
    path = "/api/briefs/{brief_id}",
    tag = BRIEF_TAG,
    params(("brief_id" = i32, Path, description = "Brief ID")),
    responses(
        (status = 200, description = "Brief", body = BriefDto),
        (status = 404, description = "Brief not found or private", body = ErrorDto)
    ),
)]
pub async fn get_brief(
    State(state): State<AppState>,
    session: Session,
    Path(brief_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let brief = DossierService::new(&state.db, state.brief_generator.as_ref())
        .get(brief_id, viewer.map(|u| u.id))
        .await?;

    Ok((StatusCode::OK, Json(brief.into_dto()?)))
}

#[utoipa::path(
    get,
    path = "/api/briefs/{brief_id}/versions",
    tag = BRIEF_TAG,
    params(("brief_id" = i32, Path, description = "Brief ID")),
    responses(
        (status = 200, description = "All versions, oldest first", body = Vec<BriefVersionDto>),
        (status = 404, description = "Brief not found or private", body = ErrorDto)
    ),
)]
pub async fn list_versions(
    State(state): State<AppState>,
    session: Session,
    Path(brief_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let brief = DossierService::new(&state.db, state.brief_generator.as_ref())
        .get(brief_id, viewer.map(|u| u.id))
        .await?;

    Ok((StatusCode::OK, Json(brief.into_version_dtos())))
}

#[utoipa::path(
    get,
    path = "/api/briefs/{brief_id}/versions/{version}",
    tag = BRIEF_TAG,
    params(
        ("brief_id" = i32, Path, description = "Brief ID"),
        ("version" = i32, Path, description = "Version number")
    ),
    responses(
        (status = 200, description = "Version", body = BriefVersionDto),
        (status = 404, description = "Brief or version not found", body = ErrorDto)
    ),
)]
pub async fn get_version(
    State(state): State<AppState>,
    session: Session,
    Path((brief_id, version)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let (version, is_current) = DossierService::new(&state.db, state.brief_generator.as_ref())
        .version(brief_id, viewer.map(|u| u.id), version)
        .await?;

    Ok((StatusCode::OK, Json(brief_version_into_dto(version, is_current))))
}

/// Deletes a brief. Ledger entries keep their `dossier:<id>` reference.
#[utoipa::path(
    delete,
    path = "/api/briefs/{brief_id}",
    tag = BRIEF_TAG,
    params(("brief_id" = i32, Path, description = "Brief ID")),
    responses(
        (status = 204, description = "Brief deleted"),
        (status = 404, description = "Brief not found", body = ErrorDto)
    ),
)]
pub async fn delete_brief(
    State(state): State<AppState>,
    session: Session,
    Path(brief_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    DossierService::new(&state.db, state.brief_generator.as_ref())
        .delete(user.id, brief_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/me/briefs",
    tag = BRIEF_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page"),
        ("entries" = Option<u64>, Query, description = "Entries per page")
    ),
    responses(
        (status = 200, description = "Own briefs, newest first", body = PaginatedBriefsDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn list_own_briefs(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let page = DossierService::new(&state.db, state.brief_generator.as_ref())
        .list_own(user.id, params)
        .await?;

    Ok((StatusCode::OK, Json(briefs_page_into_dto(page))))
}

/// Public brief gallery, newest first. `q` matches the title.
#[utoipa::path(
    get,
    path = "/api/gallery/briefs",
    tag = BRIEF_TAG,
    params(
        ("faction_id" = Option<i32>, Query, description = "Filter by faction"),
        ("detachment_id" = Option<i32>, Query, description = "Filter by detachment"),
        ("q" = Option<String>, Query, description = "Title search"),
        ("page" = Option<u64>, Query, description = "Zero-based page"),
        ("entries" = Option<u64>, Query, description = "Entries per page")
    ),
    responses(
        (status = 200, description = "Public briefs", body = PaginatedBriefsDto)
    ),
)]
pub async fn brief_gallery(
    State(state): State<AppState>,
    Query(params): Query<GalleryParams>,
) -> Result<impl IntoResponse, AppError> {
    let (filter, pagination) = params.into_parts();

    let page = DossierService::new(&state.db, state.brief_generator.as_ref())
        .gallery(filter, pagination)
        .await?;

    Ok((StatusCode::OK, Json(briefs_page_into_dto(page))))
}
