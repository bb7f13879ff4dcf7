//! Request/response data transfer objects.

pub mod request;
pub mod response;

use validator::Validate;

use ratehub_core::error::AppError;

/// Runs declarative validation on a request DTO, converting failures
/// into a 400 with per-field messages in the `details` payload.
pub fn validate_request<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate().map_err(|errors| {
        let details = serde_json::to_value(&errors).unwrap_or(serde_json::Value::Null);
        AppError::validation("Validation error").with_details(details)
    })
}
