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
        api::{ErrorDto, SetCurrentVersionDto},
        datasheet::{
            CreateDatasheetDto, DatasheetDto, DatasheetVersionDto, SetEnabledDto,
            UpdateDatasheetProfileDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::datasheet::{CreateDatasheetParam, VersionedDatasheet},
        service::datasheet::DatasheetService,
        state::AppState,
    },
};

/// Tag for grouping datasheet endpoints in OpenAPI documentation
pub static DATASHEET_TAG: &str = "datasheet";

#[derive(Deserialize, Default)]
pub struct DatasheetListParams {
    pub faction_id: Option<i32>,
}

fn into_dtos(datasheets: Vec<VersionedDatasheet>) -> Result<Vec<DatasheetDto>, AppError> {
    Ok(datasheets
        .into_iter()
        .map(VersionedDatasheet::into_dto)
        .collect::<Result<_, _>>()?)
}

/// Lists enabled datasheets with their current profiles.
#[utoipa::path(
    get,
    path = "/api/datasheets",
    tag = DATASHEET_TAG,
    params(("faction_id" = Option<i32>, Query, description = "Filter by faction")),
    responses(
        (status = 200, description = "Enabled datasheets", body = Vec<DatasheetDto>)
    ),
)]
pub async fn list_datasheets(
    State(state): State<AppState>,
    Query(params): Query<DatasheetListParams>,
) -> Result<impl IntoResponse, AppError> {
    let datasheets = DatasheetService::new(&state.db)
        .list(params.faction_id, false)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(datasheets)?)))
}

#[utoipa::path(
    get,
    path = "/api/datasheets/{datasheet_id}",
    tag = DATASHEET_TAG,
    params(("datasheet_id" = i32, Path, description = "Datasheet ID")),
    responses(
        (status = 200, description = "Datasheet with current profile", body = DatasheetDto),
        (status = 404, description = "Datasheet not found or disabled", body = ErrorDto)
    ),
)]
pub async fn get_datasheet(
    State(state): State<AppState>,
    Path(datasheet_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let datasheet = DatasheetService::new(&state.db)
        .get(datasheet_id, false)
        .await?;

    Ok((StatusCode::OK, Json(datasheet.into_dto()?)))
}

#[utoipa::path(
    get,
    path = "/api/datasheets/{datasheet_id}/versions",
    tag = DATASHEET_TAG,
    params(("datasheet_id" = i32, Path, description = "Datasheet ID")),
    responses(
        (status = 200, description = "Profile versions, oldest first", body = Vec<DatasheetVersionDto>),
        (status = 404, description = "Datasheet not found or disabled", body = ErrorDto)
    ),
)]
pub async fn list_versions(
    State(state): State<AppState>,
    Path(datasheet_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let datasheet = DatasheetService::new(&state.db)
        .get(datasheet_id, false)
        .await?;

    Ok((StatusCode::OK, Json(datasheet.into_version_dtos())))
}

/// Lists datasheets for administration, disabled ones included.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/datasheets",
    tag = DATASHEET_TAG,
    params(("faction_id" = Option<i32>, Query, description = "Filter by faction")),
    responses(
        (status = 200, description = "All datasheets", body = Vec<DatasheetDto>),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn admin_list_datasheets(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<DatasheetListParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let datasheets = DatasheetService::new(&state.db)
        .list(params.faction_id, true)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(datasheets)?)))
}

/// Creates a datasheet and stores its profile as version 1.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - New datasheet
/// - `400 Bad Request` - Blank name or role, or a profile that is not a JSON object
/// - `404 Not Found` - Unknown faction
/// - `409 Conflict` - Name already used within the faction
#[utoipa::path(
    post,
    path = "/api/admin/datasheets",
    tag = DATASHEET_TAG,
    request_body = CreateDatasheetDto,
    responses(
        (status = 201, description = "Created datasheet", body = DatasheetDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 404, description = "Faction not found", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto)
    ),
)]
pub async fn create_datasheet(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDatasheetDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let datasheet = DatasheetService::new(&state.db)
        .create(CreateDatasheetParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(datasheet.into_dto()?)))
}

/// Appends a profile version and makes it current.
#[utoipa::path(
    put,
    path = "/api/admin/datasheets/{datasheet_id}",
    tag = DATASHEET_TAG,
    params(("datasheet_id" = i32, Path, description = "Datasheet ID")),
    request_body = UpdateDatasheetProfileDto,
    responses(
        (status = 200, description = "Datasheet showing the new profile", body = DatasheetDto),
        (status = 400, description = "Profile is not a JSON object", body = ErrorDto),
        (status = 404, description = "Datasheet not found", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Path(datasheet_id): Path<i32>,
    Json(payload): Json<UpdateDatasheetProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let datasheet = DatasheetService::new(&state.db)
        .update_profile(datasheet_id, payload.profile, payload.note)
        .await?;

    Ok((StatusCode::OK, Json(datasheet.into_dto()?)))
}

#[utoipa::path(
    put,
    path = "/api/admin/datasheets/{datasheet_id}/current",
    tag = DATASHEET_TAG,
    params(("datasheet_id" = i32, Path, description = "Datasheet ID")),
    request_body = SetCurrentVersionDto,
    responses(
        (status = 200, description = "Datasheet showing the selected profile", body = DatasheetDto),
        (status = 404, description = "Datasheet or version not found", body = ErrorDto)
    ),
)]
pub async fn set_current_version(
    State(state): State<AppState>,
    session: Session,
    Path(datasheet_id): Path<i32>,
    Json(payload): Json<SetCurrentVersionDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let datasheet = DatasheetService::new(&state.db)
        .set_current(datasheet_id, payload.version)
        .await?;

    Ok((StatusCode::OK, Json(datasheet.into_dto()?)))
}

#[utoipa::path(
    put,
    path = "/api/admin/datasheets/{datasheet_id}/enabled",
    tag = DATASHEET_TAG,
    params(("datasheet_id" = i32, Path, description = "Datasheet ID")),
    request_body = SetEnabledDto,
    responses(
        (status = 200, description = "Updated datasheet", body = DatasheetDto),
        (status = 404, description = "Datasheet not found", body = ErrorDto)
    ),
)]
pub async fn set_enabled(
    State(state): State<AppState>,
    session: Session,
    Path(datasheet_id): Path<i32>,
    Json(payload): Json<SetEnabledDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let datasheet = DatasheetService::new(&state.db)
        .set_enabled(datasheet_id, payload.enabled)
        .await?;

    Ok((StatusCode::OK, Json(datasheet.into_dto()?)))
}
