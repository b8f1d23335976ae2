use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use serde::de::DeserializeOwned;

use crate::user::{parse_user_id, UserError, UserId};

/// Decode a JSON request body. An empty body decodes as `T::default()`.
pub fn parse_json_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, UserError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| UserError::ValidationError(format!("Invalid JSON body: {e}")))
}

/// Resolve the `:id` path segment. A segment axum cannot decode (bad
/// percent-encoding, invalid UTF-8) is an invalid id like any other.
pub fn path_user_id(path: Result<Path<String>, PathRejection>) -> Result<UserId, UserError> {
    match path {
        Ok(Path(raw)) => parse_user_id(&raw),
        Err(rejection) => Err(UserError::InvalidUserId(rejection.body_text())),
    }
}
