use crate::user::UserError;
use http::StatusCode;

/// Trait for mapping domain errors to HTTP status codes and stable error codes.
pub trait ToStructuredError {
    fn status_and_code(&self) -> (StatusCode, &'static str);
}

impl ToStructuredError for UserError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            UserError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            UserError::InvalidUserId(_) => (StatusCode::BAD_REQUEST, "INVALID_ID"),
            UserError::UserNotFound(_) => (StatusCode::NOT_FOUND, "USER_NOT_FOUND"),
            UserError::EmailConflict(_) => (StatusCode::CONFLICT, "EMAIL_CONFLICT"),
        }
    }
}
