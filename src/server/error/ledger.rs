use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures raised while moving tokens in or out of a user's balance.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    /// No active (non-deleted) cost row exists for the feature key.
    #[error("Unknown feature '{0}'")]
    UnknownFeature(String),

    #[error("Insufficient token balance: {required} required, {available} available")]
    InsufficientBalance { required: i64, available: i64 },

    /// Credits must be positive and adjustments nonzero.
    #[error("Invalid token amount {0}")]
    InvalidAmount(i64),

    #[error("User {0} not found")]
    UserNotFound(i32),
}

/// # Returns
/// - 400 Bad Request - `InvalidAmount`
/// - 402 Payment Required - `InsufficientBalance`
/// - 404 Not Found - `UnknownFeature`, `UserNotFound`
impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::UnknownFeature(_) | Self::UserNotFound(_) => StatusCode::NOT_FOUND,
            Self::InsufficientBalance { .. } => StatusCode::PAYMENT_REQUIRED,
            Self::InvalidAmount(_) => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
