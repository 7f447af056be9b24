use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        faction::{CreateFactionDto, FactionDetailDto, FactionDto, SetIconDto, UpdateFactionDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::faction::FactionParam,
        service::faction::FactionService,
        state::AppState,
    },
};

/// Tag for grouping faction endpoints in OpenAPI documentation
pub static FACTION_TAG: &str = "faction";

/// Lists all factions ordered by name.
#[utoipa::path(
    get,
    path = "/api/factions",
    tag = FACTION_TAG,
    responses(
        (status = 200, description = "All factions", body = Vec<FactionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_factions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let factions = FactionService::new(&state.db).list().await?;
    let dtos: Vec<FactionDto> = factions.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Gets a faction together with its detachments.
#[utoipa::path(
    get,
    path = "/api/factions/{faction_id}",
    tag = FACTION_TAG,
    params(("faction_id" = i32, Path, description = "Faction ID")),
    responses(
        (status = 200, description = "Faction with detachments", body = FactionDetailDto),
        (status = 404, description = "Faction not found", body = ErrorDto)
    ),
)]
pub async fn get_faction(
    State(state): State<AppState>,
    Path(faction_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (faction, detachments) = FactionService::new(&state.db).get(faction_id).await?;

    Ok((StatusCode::OK, Json(faction.into_detail_dto(detachments))))
}

/// Creates a faction.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - New faction
/// - `400 Bad Request` - Empty name
/// - `409 Conflict` - Name already taken
#[utoipa::path(
    post,
    path = "/api/admin/factions",
    tag = FACTION_TAG,
    request_body = CreateFactionDto,
    responses(
        (status = 201, description = "Created faction", body = FactionDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto)
    ),
)]
pub async fn create_faction(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateFactionDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let faction = FactionService::new(&state.db)
        .create(FactionParam::from_create_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(faction.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/factions/{faction_id}",
    tag = FACTION_TAG,
    params(("faction_id" = i32, Path, description = "Faction ID")),
    request_body = UpdateFactionDto,
    responses(
        (status = 200, description = "Updated faction", body = FactionDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 404, description = "Faction not found", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto)
    ),
)]
pub async fn update_faction(
    State(state): State<AppState>,
    session: Session,
    Path(faction_id): Path<i32>,
    Json(payload): Json<UpdateFactionDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let faction = FactionService::new(&state.db)
        .update(faction_id, FactionParam::from_update_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(faction.into_dto())))
}

/// Deletes a faction.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `404 Not Found` - Unknown faction
/// - `409 Conflict` - Armies or briefs still reference the faction
#[utoipa::path(
    delete,
    path = "/api/admin/factions/{faction_id}",
    tag = FACTION_TAG,
    params(("faction_id" = i32, Path, description = "Faction ID")),
    responses(
        (status = 204, description = "Faction deleted"),
        (status = 404, description = "Faction not found", body = ErrorDto),
        (status = 409, description = "Faction still in use", body = ErrorDto)
    ),
)]
pub async fn delete_faction(
    State(state): State<AppState>,
    session: Session,
    Path(faction_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    FactionService::new(&state.db).delete(faction_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Sets the faction icon URL. Only http(s) URLs are accepted.
#[utoipa::path(
    put,
    path = "/api/admin/factions/{faction_id}/icon",
    tag = FACTION_TAG,
    params(("faction_id" = i32, Path, description = "Faction ID")),
    request_body = SetIconDto,
    responses(
        (status = 200, description = "Updated faction", body = FactionDto),
        (status = 400, description = "Invalid icon URL", body = ErrorDto),
        (status = 404, description = "Faction not found", body = ErrorDto)
    ),
)]
pub async fn set_faction_icon(
    State(state): State<AppState>,
    session: Session,
    Path(faction_id): Path<i32>,
    Json(payload): Json<SetIconDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let faction = FactionService::new(&state.db)
        .set_icon(faction_id, Some(&payload.icon_url))
        .await?;

    Ok((StatusCode::OK, Json(faction.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/factions/{faction_id}/icon",
    tag = FACTION_TAG,
    params(("faction_id" = i32, Path, description = "Faction ID")),
    responses(
        (status = 200, description = "Faction without icon", body = FactionDto),
        (status = 404, description = "Faction not found", body = ErrorDto)
    ),
)]
pub async fn clear_faction_icon(
    State(state): State<AppState>,
    session: Session,
    Path(faction_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let faction = FactionService::new(&state.db)
        .set_icon(faction_id, None)
        .await?;

    Ok((StatusCode::OK, Json(faction.into_dto())))
}
