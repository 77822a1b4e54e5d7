use tracing::debug;

use shared_models::{AppError, AppResult};

/// Trims `value` and rejects it if nothing is left.
pub fn required(field: &str, value: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        debug!("Rejected blank field: {}", field);
        return Err(AppError::InvalidInput(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Like [`required`], but leaves the value untouched. Used for secrets,
/// which are compared byte for byte.
pub fn required_verbatim(field: &str, value: &str) -> AppResult<()> {
    required(field, value).map(|_| ())
}

/// Trims an optional free-text field; blank is fine.
pub fn optional(value: &str) -> String {
    value.trim().to_string()
}
