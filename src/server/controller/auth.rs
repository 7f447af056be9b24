use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession, OAuthFlowSession},
        },
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct LoginParams {
    /// One-time bootstrap code printed to the server log when no admin exists.
    pub admin_code: Option<String>,
}

/// Query parameters Discord appends to the OAuth callback.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code to exchange for an access token.
    pub code: String,
}

/// Starts the Discord login flow.
///
/// Stores a CSRF token in the session and redirects to Discord. A valid `admin_code`
/// marks the flow so the callback grants admin to whoever completes it.
///
/// # Returns
/// - `307 Temporary Redirect` - To the Discord authorize URL
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    params(
        ("admin_code" = Option<String>, Query, description = "Bootstrap admin code")
    ),
    responses(
        (status = 307, description = "Redirect to Discord"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.http_client, &state.oauth_client);

    if let Some(code) = params.admin_code {
        let valid = state.admin_code_service.validate_and_consume(&code).await;
        if valid {
            tracing::info!("Admin bootstrap code accepted, admin will be granted on callback");
        } else {
            tracing::debug!("Ignoring invalid admin bootstrap code");
        }
        OAuthFlowSession::new(&session).set_admin_flag(valid).await?;
    }

    let (url, csrf_token) = auth_service.login_url();
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Completes the Discord login flow.
///
/// Validates the single-use CSRF token, exchanges the code, signs the user in (crediting
/// the signup grant to new accounts) and redirects to the app.
///
/// # Returns
/// - `307 Temporary Redirect` - To `APP_URL`
/// - `400 Bad Request` - CSRF mismatch or rejected code
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 307, description = "Logged in, redirect to the app"),
        (status = 400, description = "CSRF mismatch or rejected code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    if !CsrfSession::new(&session).validate(&params.state).await? {
        return Err(AuthError::CsrfValidationFailed.into());
    }

    let set_admin = OAuthFlowSession::new(&session).take_admin_flag().await?;

    let user = AuthService::new(&state.db, &state.http_client, &state.oauth_client)
        .callback(params.code, set_admin, state.signup_token_grant)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Redirect::temporary(&state.app_url))
}

#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session cleared, redirect to the app")
    ),
)]
pub async fn logout(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    Redirect::temporary(&state.app_url)
}

/// Returns the logged-in user.
///
/// # Returns
/// - `200 OK` - Current user with token balance
/// - `404 Not Found` - Not logged in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 404, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .optional()
        .await?
        .ok_or_else(|| AppError::NotFound("Not logged in".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
