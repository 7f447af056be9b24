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
        feature_cost::{CreateFeatureCostDto, FeatureCostDto, UpdateFeatureCostDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::feature_cost::{CreateFeatureCostParam, UpdateFeatureCostParam},
        service::feature_cost::FeatureCostService,
        state::AppState,
    },
};

/// Tag for grouping feature cost endpoints in OpenAPI documentation
pub static FEATURE_COST_TAG: &str = "feature_cost";

#[derive(Deserialize, Default)]
pub struct FeatureCostListParams {
    #[serde(default)]
    pub include_deleted: bool,
}

/// Lists feature costs for administration.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `include_deleted` - Also list retired costs still referenced by the ledger
#[utoipa::path(
    get,
    path = "/api/admin/feature-costs",
    tag = FEATURE_COST_TAG,
    params(
        ("include_deleted" = Option<bool>, Query, description = "Include soft-deleted costs")
    ),
    responses(
        (status = 200, description = "Feature costs", body = Vec<FeatureCostDto>),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn list_feature_costs(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<FeatureCostListParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let costs = FeatureCostService::new(&state.db)
        .list(params.include_deleted)
        .await?;
    let dtos: Vec<FeatureCostDto> = costs.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Prices a feature.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - New cost
/// - `400 Bad Request` - Key not `[a-z0-9_]+`, blank name or negative cost
/// - `409 Conflict` - Key already has an active cost
#[utoipa::path(
    post,
    path = "/api/admin/feature-costs",
    tag = FEATURE_COST_TAG,
    request_body = CreateFeatureCostDto,
    responses(
        (status = 201, description = "Created feature cost", body = FeatureCostDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Key already priced", body = ErrorDto)
    ),
)]
pub async fn create_feature_cost(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateFeatureCostDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let cost = FeatureCostService::new(&state.db)
        .create(CreateFeatureCostParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(cost.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/feature-costs/{cost_id}",
    tag = FEATURE_COST_TAG,
    params(("cost_id" = i32, Path, description = "Feature cost ID")),
    request_body = UpdateFeatureCostDto,
    responses(
        (status = 200, description = "Updated feature cost", body = FeatureCostDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 404, description = "Unknown or deleted cost", body = ErrorDto)
    ),
)]
pub async fn update_feature_cost(
    State(state): State<AppState>,
    session: Session,
    Path(cost_id): Path<i32>,
    Json(payload): Json<UpdateFeatureCostDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let cost = FeatureCostService::new(&state.db)
        .update(cost_id, UpdateFeatureCostParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(cost.into_dto())))
}

/// Retires a cost. The row stays so existing ledger entries keep their reference.
#[utoipa::path(
    delete,
    path = "/api/admin/feature-costs/{cost_id}",
    tag = FEATURE_COST_TAG,
    params(("cost_id" = i32, Path, description = "Feature cost ID")),
    responses(
        (status = 204, description = "Feature cost retired"),
        (status = 404, description = "Unknown or already deleted cost", body = ErrorDto)
    ),
)]
pub async fn delete_feature_cost(
    State(state): State<AppState>,
    session: Session,
    Path(cost_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    FeatureCostService::new(&state.db).delete(cost_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
