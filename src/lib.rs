// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod app;
pub mod config;
pub mod cors;
pub mod http_logging;
pub mod logging;
pub mod metrics;
pub mod server;
pub mod user;
pub mod utils;

// Re-export commonly used types
pub use server::{build_app, router, AppState, ServiceInfo};
pub use user::{
    CreateUserOptions, InMemoryUserStore, ListQuery, UpdateUserOptions, User, UserError,
    UserPage, UserStore,
};
