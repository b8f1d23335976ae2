use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use http::StatusCode;
use serde::Deserialize;

use crate::metrics::OperationTimer;
use crate::server::helpers::parse_json_body;
use crate::server::AppState;
use crate::user::{CreateUserOptions, User, UserError};

#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), UserError> {
    let _timer = OperationTimer::new("create_user");
    let req: CreateUserRequest = parse_json_body(&body)?;
    let options = CreateUserOptions::new(req.name, req.email, req.role)?;
    let user = state.store.create_user(options).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
