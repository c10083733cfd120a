//! HTTP request handlers, grouped by resource.

pub mod documents;
pub mod rewrite;
pub mod system;
pub mod uploads;

use crate::ApiError;

/// Validate a field's character length, inclusive on both ends. Lengths
/// count Unicode scalar values of the raw value, untrimmed.
pub(crate) fn validate_length(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ApiError> {
    let chars = value.chars().count();
    if chars < min || chars > max {
        return Err(ApiError::BadRequest(format!(
            "{} must be between {} and {} characters",
            field, min, max
        )));
    }
    Ok(())
}
