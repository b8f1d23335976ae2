//! HTTP surface: shared state, router and middleware stack.

mod error_mapping;
mod handlers;
mod helpers;
mod structured_error;

pub use error_mapping::ToStructuredError;
pub use handlers::{ServiceInfo, StatusResponse, SERVICE_DESCRIPTION, SERVICE_NAME};
pub use structured_error::ErrorBody;

use crate::cors::build_cors_layer;
use crate::http_logging::HttpLoggingLayer;
use crate::user::{InMemoryUserStore, UserStore};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub info: Arc<ServiceInfo>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>, version: &str) -> Self {
        Self {
            store,
            info: Arc::new(ServiceInfo::new(version)),
        }
    }

    /// State backed by a fresh in-memory store holding the seed users.
    #[must_use]
    pub fn seeded(version: &str) -> Self {
        Self::new(Arc::new(InMemoryUserStore::seeded()), version)
    }
}

/// Build the route table. Unknown paths and unsupported methods answer
/// with JSON error bodies.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::root).fallback(structured_error::method_not_allowed),
        )
        .route(
            "/health",
            get(handlers::health).fallback(structured_error::method_not_allowed),
        )
        .route(
            "/test",
            get(handlers::test_status).fallback(structured_error::method_not_allowed),
        )
        .route(
            "/users",
            get(handlers::list_users)
                .post(handlers::create_user)
                .fallback(structured_error::method_not_allowed),
        )
        .route(
            "/users/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user)
                .fallback(structured_error::method_not_allowed),
        )
        .fallback(structured_error::route_not_found)
        .with_state(state)
}

/// Build the full application: routes plus request logging and CORS.
#[must_use]
pub fn build_app(state: AppState, cors_origins: Vec<String>) -> Router {
    router(state)
        .layer(HttpLoggingLayer)
        .layer(build_cors_layer(cors_origins))
}
