use axum::extract::{Query, State};
use axum::Json;

use crate::metrics::OperationTimer;
use crate::server::AppState;
use crate::user::{ListQuery, ListUsersParams, UserPage};

/// `GET /users`. Never fails: the query is decoded pair by pair, so a
/// repeated or unknown key only affects itself.
pub async fn list_users(
    State(state): State<AppState>,
    pairs: Option<Query<Vec<(String, String)>>>,
) -> Json<UserPage> {
    let _timer = OperationTimer::new("list_users");
    let params = pairs
        .map(|Query(pairs)| ListUsersParams::from_pairs(pairs))
        .unwrap_or_default();
    let query = ListQuery::from_params(params);
    Json(state.store.list_users(&query).await)
}
