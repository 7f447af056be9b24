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
        faction::{CreateDetachmentDto, DetachmentDto, SetIconDto, UpdateDetachmentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::faction::DetachmentParam,
        service::detachment::DetachmentService,
        state::AppState,
    },
};

/// Tag for grouping detachment endpoints in OpenAPI documentation
pub static DETACHMENT_TAG: &str = "detachment";

#[utoipa::path(
    get,
    path = "/api/factions/{faction_id}/detachments",
    tag = DETACHMENT_TAG,
    params(("faction_id" = i32, Path, description = "Faction ID")),
    responses(
        (status = 200, description = "Detachments of the faction", body = Vec<DetachmentDto>),
        (status = 404, description = "Faction not found", body = ErrorDto)
    ),
)]
pub async fn list_detachments(
    State(state): State<AppState>,
    Path(faction_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detachments = DetachmentService::new(&state.db).list(faction_id).await?;
    let dtos: Vec<DetachmentDto> = detachments.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/detachments/{detachment_id}",
    tag = DETACHMENT_TAG,
    params(("detachment_id" = i32, Path, description = "Detachment ID")),
    responses(
        (status = 200, description = "Detachment", body = DetachmentDto),
        (status = 404, description = "Detachment not found", body = ErrorDto)
    ),
)]
pub async fn get_detachment(
    State(state): State<AppState>,
    Path(detachment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detachment = DetachmentService::new(&state.db).get(detachment_id).await?;

    Ok((StatusCode::OK, Json(detachment.into_dto())))
}

/// Adds a detachment to a faction.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - New detachment
/// - `404 Not Found` - Unknown faction
/// - `409 Conflict` - Name already used within the faction
#[utoipa::path(
    post,
    path = "/api/admin/factions/{faction_id}/detachments",
    tag = DETACHMENT_TAG,
    params(("faction_id" = i32, Path, description = "Faction ID")),
    request_body = CreateDetachmentDto,
    responses(
        (status = 201, description = "Created detachment", body = DetachmentDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 404, description = "Faction not found", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto)
    ),
)]
pub async fn create_detachment(
    State(state): State<AppState>,
    session: Session,
    Path(faction_id): Path<i32>,
    Json(payload): Json<CreateDetachmentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let detachment = DetachmentService::new(&state.db)
        .create(faction_id, DetachmentParam::from_create_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(detachment.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/detachments/{detachment_id}",
    tag = DETACHMENT_TAG,
    params(("detachment_id" = i32, Path, description = "Detachment ID")),
    request_body = UpdateDetachmentDto,
    responses(
        (status = 200, description = "Updated detachment", body = DetachmentDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 404, description = "Detachment not found", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto)
    ),
)]
pub async fn update_detachment(
    State(state): State<AppState>,
    session: Session,
    Path(detachment_id): Path<i32>,
    Json(payload): Json<UpdateDetachmentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let detachment = DetachmentService::new(&state.db)
        .update(detachment_id, DetachmentParam::from_update_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(detachment.into_dto())))
}

/// Deletes a detachment and its stratagems.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `409 Conflict` - Armies still use the detachment
#[utoipa::path(
    delete,
    path = "/api/admin/detachments/{detachment_id}",
    tag = DETACHMENT_TAG,
    params(("detachment_id" = i32, Path, description = "Detachment ID")),
    responses(
        (status = 204, description = "Detachment deleted"),
        (status = 404, description = "Detachment not found", body = ErrorDto),
        (status = 409, description = "Detachment still in use", body = ErrorDto)
    ),
)]
pub async fn delete_detachment(
    State(state): State<AppState>,
    session: Session,
    Path(detachment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    DetachmentService::new(&state.db).delete(detachment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/admin/detachments/{detachment_id}/icon",
    tag = DETACHMENT_TAG,
    params(("detachment_id" = i32, Path, description = "Detachment ID")),
    request_body = SetIconDto,
    responses(
        (status = 200, description = "Updated detachment", body = DetachmentDto),
        (status = 400, description = "Invalid icon URL", body = ErrorDto),
        (status = 404, description = "Detachment not found", body = ErrorDto)
    ),
)]
pub async fn set_detachment_icon(
    State(state): State<AppState>,
    session: Session,
    Path(detachment_id): Path<i32>,
    Json(payload): Json<SetIconDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let detachment = DetachmentService::new(&state.db)
        .set_icon(detachment_id, Some(&payload.icon_url))
        .await?;

    Ok((StatusCode::OK, Json(detachment.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/detachments/{detachment_id}/icon",
    tag = DETACHMENT_TAG,
    params(("detachment_id" = i32, Path, description = "Detachment ID")),
    responses(
        (status = 200, description = "Detachment without icon", body = DetachmentDto),
        (status = 404, description = "Detachment not found", body = ErrorDto)
    ),
)]
pub async fn clear_detachment_icon(
    State(state): State<AppState>,
    session: Session,
    Path(detachment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let detachment = DetachmentService::new(&state.db)
        .set_icon(detachment_id, None)
        .await?;

    Ok((StatusCode::OK, Json(detachment.into_dto())))
}
