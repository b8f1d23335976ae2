use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::server::AppState;
use crate::utils::now_iso;

pub const SERVICE_NAME: &str = "users-api";
pub const SERVICE_DESCRIPTION: &str =
    "A small REST API exposing CRUD operations over an in-memory user list";

const ENDPOINTS: [(&str, &str); 7] = [
    ("GET /", "API information"),
    ("GET /health", "Health check"),
    ("GET /users", "List users (query: page, limit, role, search)"),
    ("GET /users/:id", "Get user by ID"),
    ("POST /users", "Create a new user"),
    ("PUT /users/:id", "Update a user"),
    ("DELETE /users/:id", "Delete a user"),
];

/// Document returned by `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: BTreeMap<String, String>,
}

impl ServiceInfo {
    #[must_use]
    pub fn new(version: &str) -> Self {
        Self {
            name: SERVICE_NAME.to_string(),
            version: version.to_string(),
            description: SERVICE_DESCRIPTION.to_string(),
            endpoints: ENDPOINTS
                .iter()
                .map(|(route, summary)| ((*route).to_string(), (*summary).to_string()))
                .collect(),
        }
    }
}

/// Body of `GET /health` and `GET /test`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
    pub timestamp: String,
}

impl StatusResponse {
    fn now(status: &str) -> Self {
        Self {
            status: status.to_string(),
            timestamp: now_iso(),
        }
    }
}

pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(state.info.as_ref().clone())
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse::now("ok"))
}

pub async fn test_status() -> Json<StatusResponse> {
    Json(StatusResponse::now("test"))
}
