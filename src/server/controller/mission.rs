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
        mission::{MissionDto, MissionPayloadDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::mission::MissionParam,
        service::mission::MissionService,
        state::AppState,
    },
};

/// Tag for grouping mission endpoints in OpenAPI documentation
pub static MISSION_TAG: &str = "mission";

#[utoipa::path(
    get,
    path = "/api/missions",
    tag = MISSION_TAG,
    responses(
        (status = 200, description = "All missions", body = Vec<MissionDto>)
    ),
)]
pub async fn list_missions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let missions = MissionService::new(&state.db).list().await?;
    let dtos: Vec<MissionDto> = missions.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/missions/{mission_id}",
    tag = MISSION_TAG,
    params(("mission_id" = i32, Path, description = "Mission ID")),
    responses(
        (status = 200, description = "Mission", body = MissionDto),
        (status = 404, description = "Mission not found", body = ErrorDto)
    ),
)]
pub async fn get_mission(
    State(state): State<AppState>,
    Path(mission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mission = MissionService::new(&state.db).get(mission_id).await?;

    Ok((StatusCode::OK, Json(mission.into_dto())))
}

/// Creates a mission.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - New mission
/// - `400 Bad Request` - Blank name, deployment or primary objective
/// - `409 Conflict` - Name already taken
#[utoipa::path(
    post,
    path = "/api/admin/missions",
    tag = MISSION_TAG,
    request_body = MissionPayloadDto,
    responses(
        (status = 201, description = "Created mission", body = MissionDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto)
    ),
)]
pub async fn create_mission(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<MissionPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let mission = MissionService::new(&state.db)
        .create(MissionParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(mission.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/missions/{mission_id}",
    tag = MISSION_TAG,
    params(("mission_id" = i32, Path, description = "Mission ID")),
    request_body = MissionPayloadDto,
    responses(
        (status = 200, description = "Updated mission", body = MissionDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto)
    ),
)]
pub async fn update_mission(
    State(state): State<AppState>,
    session: Session,
    Path(mission_id): Path<i32>,
    Json(payload): Json<MissionPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let mission = MissionService::new(&state.db)
        .update(mission_id, MissionParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(mission.into_dto())))
}

/// Deletes a mission that no game session references.
#[utoipa::path(
    delete,
    path = "/api/admin/missions/{mission_id}",
    tag = MISSION_TAG,
    params(("mission_id" = i32, Path, description = "Mission ID")),
    responses(
        (status = 204, description = "Mission deleted"),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 409, description = "Mission used by game sessions", body = ErrorDto)
    ),
)]
pub async fn delete_mission(
    State(state): State<AppState>,
    session: Session,
    Path(mission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MissionService::new(&state.db).delete(mission_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
