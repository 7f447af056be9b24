use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Discord rejected the authorization code exchange.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchangeFailed(String),

    /// No user ID is stored in the session.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// User is logged in but lacks the required permission.
    ///
    /// # Fields
    /// - User ID
    /// - Description of the attempted action, logged only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

impl<RE, T> From<oauth2::RequestTokenError<RE, T>> for AuthError
where
    RE: std::error::Error + 'static,
    T: oauth2::ErrorResponse + 'static,
{
    fn from(err: oauth2::RequestTokenError<RE, T>) -> Self {
        Self::TokenExchangeFailed(err.to_string())
    }
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level while client-facing messages stay generic.
///
/// # Returns
/// - 400 Bad Request - CSRF failures and rejected code exchanges
/// - 401 Unauthorized - No user in session
/// - 403 Forbidden - Missing permission
/// - 404 Not Found - Session user no longer exists
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::CsrfValidationFailed | Self::TokenExchangeFailed(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Not logged in"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
