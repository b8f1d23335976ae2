use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::metrics::OperationTimer;
use crate::server::helpers::path_user_id;
use crate::server::AppState;
use crate::user::{User, UserError};

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub message: String,
    pub user: User,
}

pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DeleteUserResponse>, UserError> {
    let id = path_user_id(path)?;
    let _timer = OperationTimer::for_user("delete_user", id);
    let user = state.store.delete_user(id).await?;
    Ok(Json(DeleteUserResponse {
        message: format!("User {} deleted successfully", user.name),
        user,
    }))
}
