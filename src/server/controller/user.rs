use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{PaginatedUsersDto, SetAdminDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::users_page_into_dto,
        service::user::UserService,
        state::AppState,
        util::pagination::PaginationParams,
    },
};

/// Tag for grouping user administration endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Lists all users with their token balances.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - Page of users
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page"),
        ("entries" = Option<u64>, Query, description = "Entries per page")
    ),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).get_all_users(params).await?;

    Ok((StatusCode::OK, Json(users_page_into_dto(users))))
}

/// Grants or revokes admin status.
///
/// Admins cannot revoke their own status, which keeps at least one admin around.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Self-revocation
/// - `404 Not Found` - Unknown user
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/admin",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = SetAdminDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Cannot revoke own admin status", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn set_admin(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<SetAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .set_admin(admin.id, user_id, payload.admin)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
