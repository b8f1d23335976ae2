//! User management module.
//!
//! This module provides the user roster:
//! - The `User` record and the errors raised while handling it
//! - Validated create/update options
//! - Listing queries (role filter, search, pagination)
//! - The `UserStore` trait and its in-memory implementation

mod options;
mod query;
mod storage;
mod types;

pub use options::{CreateUserOptions, UpdateUserOptions, DEFAULT_ROLE, NAME_AND_EMAIL_REQUIRED};
pub use query::{paginate, ListQuery, ListUsersParams, UserPage, DEFAULT_LIMIT, MAX_LIMIT};
pub use storage::{find_user_by_email, find_user_by_id, InMemoryUserStore, UserStore};
pub use types::{parse_user_id, seed_users, User, UserError, UserId};
