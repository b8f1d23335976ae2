use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::server::error_mapping::ToStructuredError;
use crate::user::UserError;

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        warn!(
            error.code = code,
            http.status = status.as_u16(),
            "{self}"
        );
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

/// Fallback for paths no route matches.
pub async fn route_not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Route not found")))
}

/// Fallback for a known path hit with a method it does not serve.
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody::new("Method not allowed")),
    )
}
