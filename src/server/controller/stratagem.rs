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
        stratagem::{StratagemDto, StratagemPayloadDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::stratagem::{Phase, StratagemFilter, StratagemParam},
        service::stratagem::StratagemService,
        state::AppState,
    },
};

/// Tag for grouping stratagem endpoints in OpenAPI documentation
pub static STRATAGEM_TAG: &str = "stratagem";

#[derive(Deserialize)]
pub struct StratagemSearchParams {
    pub detachment_id: Option<i32>,
    pub phase: Option<String>,
    #[serde(default = "include_core_default")]
    pub include_core: bool,
}

fn include_core_default() -> bool {
    true
}

impl StratagemSearchParams {
    fn into_filter(self) -> Result<StratagemFilter, AppError> {
        let phase = self
            .phase
            .map(|p| {
                Phase::parse(&p).ok_or_else(|| AppError::BadRequest(format!("Unknown phase '{}'", p)))
            })
            .transpose()?;

        Ok(StratagemFilter {
            detachment_id: self.detachment_id,
            phase,
            include_core: self.include_core,
        })
    }
}

/// Looks up stratagems.
///
/// # Arguments
/// - `detachment_id` - Only this detachment's stratagems
/// - `phase` - Only stratagems usable in this phase; `any` stratagems always match
/// - `include_core` - Also return core stratagems, defaults to true
#[utoipa::path(
    get,
    path = "/api/stratagems",
    tag = STRATAGEM_TAG,
    params(
        ("detachment_id" = Option<i32>, Query, description = "Filter by detachment"),
        ("phase" = Option<String>, Query, description = "Filter by phase"),
        ("include_core" = Option<bool>, Query, description = "Include core stratagems")
    ),
    responses(
        (status = 200, description = "Matching stratagems", body = Vec<StratagemDto>),
        (status = 400, description = "Unknown phase", body = ErrorDto)
    ),
)]
pub async fn search_stratagems(
    State(state): State<AppState>,
    Query(params): Query<StratagemSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let stratagems = StratagemService::new(&state.db)
        .search(params.into_filter()?)
        .await?;
    let dtos: Vec<StratagemDto> = stratagems.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/stratagems/{stratagem_id}",
    tag = STRATAGEM_TAG,
    params(("stratagem_id" = i32, Path, description = "Stratagem ID")),
    responses(
        (status = 200, description = "Stratagem", body = StratagemDto),
        (status = 404, description = "Stratagem not found", body = ErrorDto)
    ),
)]
pub async fn get_stratagem(
    State(state): State<AppState>,
    Path(stratagem_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let stratagem = StratagemService::new(&state.db).get(stratagem_id).await?;

    Ok((StatusCode::OK, Json(stratagem.into_dto())))
}

/// Creates a stratagem. A missing `detachment_id` makes it a core stratagem.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - New stratagem
/// - `400 Bad Request` - Unknown phase or detachment, blank name, CP cost outside 0..=3
/// - `409 Conflict` - Name already used by the detachment or among core stratagems
#[utoipa::path(
    post,
    path = "/api/admin/stratagems",
    tag = STRATAGEM_TAG,
    request_body = StratagemPayloadDto,
    responses(
        (status = 201, description = "Created stratagem", body = StratagemDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto)
    ),
)]
pub async fn create_stratagem(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<StratagemPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = StratagemParam::from_dto(payload).map_err(AppError::BadRequest)?;
    let stratagem = StratagemService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(stratagem.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/stratagems/{stratagem_id}",
    tag = STRATAGEM_TAG,
    params(("stratagem_id" = i32, Path, description = "Stratagem ID")),
    request_body = StratagemPayloadDto,
    responses(
        (status = 200, description = "Updated stratagem", body = StratagemDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 404, description = "Stratagem not found", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto)
    ),
)]
pub async fn update_stratagem(
    State(state): State<AppState>,
    session: Session,
    Path(stratagem_id): Path<i32>,
    Json(payload): Json<StratagemPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = StratagemParam::from_dto(payload).map_err(AppError::BadRequest)?;
    let stratagem = StratagemService::new(&state.db)
        .update(stratagem_id, param)
        .await?;

    Ok((StatusCode::OK, Json(stratagem.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/stratagems/{stratagem_id}",
    tag = STRATAGEM_TAG,
    params(("stratagem_id" = i32, Path, description = "Stratagem ID")),
    responses(
        (status = 204, description = "Stratagem deleted"),
        (status = 404, description = "Stratagem not found", body = ErrorDto)
    ),
)]
pub async fn delete_stratagem(
    State(state): State<AppState>,
    session: Session,
    Path(stratagem_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    StratagemService::new(&state.db).delete(stratagem_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
