//! Input checks shared by several services.

use url::Url;

use crate::server::error::AppError;

/// Trims a name and rejects it when nothing is left.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - Raw input
///
/// # Returns
/// - `Ok(String)` - Trimmed value
/// - `Err(AppError::BadRequest)` - Value is empty or whitespace only
pub fn required_name(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Normalizes optional free text: trims it and maps blank input to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Validates an icon URL. Only absolute `http` and `https` URLs are accepted.
pub fn icon_url(value: &str) -> Result<String, AppError> {
    let url = Url::parse(value.trim())
        .map_err(|_| AppError::BadRequest(format!("Invalid icon URL '{}'", value)))?;

    match url.scheme() {
        "http" | "https" if url.host().is_some() => Ok(url.to_string()),
        _ => Err(AppError::BadRequest(
            "Icon URL must use http or https".to_string(),
        )),
    }
}

/// Checks that a feature key is non-empty and only uses `[a-z0-9_]`.
pub fn feature_key(value: &str) -> Result<String, AppError> {
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

    if !valid {
        return Err(AppError::BadRequest(format!(
            "Feature key '{}' may only contain lowercase letters, digits and underscores",
            value
        )));
    }

    Ok(value.to_string())
}
