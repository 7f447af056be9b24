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
        feature_cost::FeatureCostDto,
        token::{
            AdjustTokensDto, BalanceDto, LedgerEntryDto, PaginatedLedgerDto, PurchaseDto,
            PurchaseRequestDto, TokenPackageDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::token::{ledger_page_into_dto, PurchaseStatus},
        service::{feature_cost::FeatureCostService, token::TokenService},
        state::AppState,
        util::pagination::PaginationParams,
    },
};

/// Tag for grouping token endpoints in OpenAPI documentation
pub static TOKEN_TAG: &str = "token";

#[derive(Deserialize, Default)]
pub struct PurchaseListParams {
    pub status: Option<String>,
}

/// Gets the logged-in user's token balance.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    get,
    path = "/api/tokens/balance",
    tag = TOKEN_TAG,
    responses(
        (status = 200, description = "Current balance", body = BalanceDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_balance(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let balance = TokenService::new(&state.db).balance(user.id).await?;

    Ok((StatusCode::OK, Json(BalanceDto { balance })))
}

/// Gets the logged-in user's ledger, newest first.
#[utoipa::path(
    get,
    path = "/api/tokens/ledger",
    tag = TOKEN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page"),
        ("entries" = Option<u64>, Query, description = "Entries per page")
    ),
    responses(
        (status = 200, description = "Page of ledger entries", body = PaginatedLedgerDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_ledger(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let page = TokenService::new(&state.db).ledger(user.id, params).await?;

    Ok((StatusCode::OK, Json(ledger_page_into_dto(page))))
}

/// Lists active feature prices.
#[utoipa::path(
    get,
    path = "/api/tokens/costs",
    tag = TOKEN_TAG,
    responses(
        (status = 200, description = "Active feature costs", body = Vec<FeatureCostDto>)
    ),
)]
pub async fn get_costs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let costs = FeatureCostService::new(&state.db).list(false).await?;
    let dtos: Vec<FeatureCostDto> = costs.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/tokens/packages",
    tag = TOKEN_TAG,
    responses(
        (status = 200, description = "Purchasable token packages", body = Vec<TokenPackageDto>)
    ),
)]
pub async fn get_packages(State(state): State<AppState>) -> impl IntoResponse {
    let packages: Vec<TokenPackageDto> = TokenService::new(&state.db)
        .packages()
        .into_iter()
        .map(|p| p.into_dto())
        .collect();

    (StatusCode::OK, Json(packages))
}

/// Requests a token package.
///
/// No payment provider is wired in. The purchase stays pending until an admin completes
/// it, and is cancelled automatically after a day.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `202 Accepted` - Pending purchase
/// - `400 Bad Request` - Unknown package
#[utoipa::path(
    post,
    path = "/api/tokens/purchase",
    tag = TOKEN_TAG,
    request_body = PurchaseRequestDto,
    responses(
        (status = 202, description = "Purchase recorded as pending", body = PurchaseDto),
        (status = 400, description = "Unknown package", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn purchase(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PurchaseRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let purchase = TokenService::new(&state.db)
        .purchase(user.id, &payload.package)
        .await?;

    Ok((StatusCode::ACCEPTED, Json(purchase.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/tokens/purchases",
    tag = TOKEN_TAG,
    responses(
        (status = 200, description = "Own purchases, newest first", body = Vec<PurchaseDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_purchases(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let purchases = TokenService::new(&state.db).purchases(user.id).await?;
    let dtos: Vec<PurchaseDto> = purchases.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Adds or removes tokens from a user's balance.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Ledger entry of the adjustment
/// - `400 Bad Request` - Zero amount
/// - `402 Payment Required` - Adjustment would make the balance negative
/// - `404 Not Found` - Unknown user
#[utoipa::path(
    post,
    path = "/api/admin/users/{user_id}/tokens",
    tag = TOKEN_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = AdjustTokensDto,
    responses(
        (status = 201, description = "Adjustment recorded", body = LedgerEntryDto),
        (status = 400, description = "Zero amount", body = ErrorDto),
        (status = 402, description = "Balance would become negative", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn adjust_tokens(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<AdjustTokensDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let entry = TokenService::new(&state.db)
        .adjust(user_id, payload.amount, payload.note)
        .await?;

    tracing::info!(
        admin_id = admin.id,
        user_id,
        amount = payload.amount,
        "Admin adjusted token balance"
    );

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

/// Lists all purchases, optionally filtered by status.
#[utoipa::path(
    get,
    path = "/api/admin/purchases",
    tag = TOKEN_TAG,
    params(
        ("status" = Option<String>, Query, description = "pending, completed or cancelled")
    ),
    responses(
        (status = 200, description = "Purchases, newest first", body = Vec<PurchaseDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_all_purchases(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PurchaseListParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let status = params
        .status
        .map(|s| {
            PurchaseStatus::parse(&s)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown purchase status '{}'", s)))
        })
        .transpose()?;

    let purchases = TokenService::new(&state.db).all_purchases(status).await?;
    let dtos: Vec<PurchaseDto> = purchases.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Completes a pending purchase and credits its tokens.
///
/// # Returns
/// - `200 OK` - Completed purchase linked to its ledger entry
/// - `404 Not Found` - Unknown purchase
/// - `409 Conflict` - Purchase is no longer pending
#[utoipa::path(
    post,
    path = "/api/admin/purchases/{purchase_id}/complete",
    tag = TOKEN_TAG,
    params(("purchase_id" = i32, Path, description = "Purchase ID")),
    responses(
        (status = 200, description = "Purchase completed", body = PurchaseDto),
        (status = 404, description = "Purchase not found", body = ErrorDto),
        (status = 409, description = "Purchase not pending", body = ErrorDto)
    ),
)]
pub async fn complete_purchase(
    State(state): State<AppState>,
    session: Session,
    Path(purchase_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let purchase = TokenService::new(&state.db)
        .complete_purchase(purchase_id)
        .await?;

    Ok((StatusCode::OK, Json(purchase.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/admin/purchases/{purchase_id}/cancel",
    tag = TOKEN_TAG,
    params(("purchase_id" = i32, Path, description = "Purchase ID")),
    responses(
        (status = 200, description = "Purchase cancelled", body = PurchaseDto),
        (status = 404, description = "Purchase not found", body = ErrorDto),
        (status = 409, description = "Purchase not pending", body = ErrorDto)
    ),
)]
pub async fn cancel_purchase(
    State(state): State<AppState>,
    session: Session,
    Path(purchase_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let purchase = TokenService::new(&state.db)
        .cancel_purchase(purchase_id)
        .await?;

    Ok((StatusCode::OK, Json(purchase.into_dto())))
}
