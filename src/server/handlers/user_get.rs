use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::metrics::OperationTimer;
use crate::server::helpers::path_user_id;
use crate::server::AppState;
use crate::user::{User, UserError};

pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<User>, UserError> {
    let id = path_user_id(path)?;
    let _timer = OperationTimer::for_user("get_user", id);
    let user = state.store.get_user(id).await?;
    Ok(Json(user))
}
