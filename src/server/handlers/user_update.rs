use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::metrics::OperationTimer;
use crate::server::helpers::{parse_json_body, path_user_id};
use crate::server::AppState;
use crate::user::{UpdateUserOptions, User, UserError};

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

/// `PUT /users/:id`. The id is validated before the body is decoded.
pub async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<User>, UserError> {
    let id = path_user_id(path)?;
    let _timer = OperationTimer::for_user("update_user", id);
    let req: UpdateUserRequest = parse_json_body(&body)?;
    let options = UpdateUserOptions::new(req.name, req.email, req.role);
    let user = state.store.update_user(id, options).await?;
    Ok(Json(user))
}
