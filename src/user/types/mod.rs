//! User type definitions and error types.
mod utils;
pub use utils::{parse_user_id, seed_users};
use serde::{Deserialize, Serialize};
use thiserror::Error;
/// Numeric user identifier. Always positive.
pub type UserId = u64;
/// A user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
}
impl User {
    #[must_use]
    pub fn new(id: UserId, name: &str, email: &str, role: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        }
    }
}
/// User-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("{0}")] ValidationError(String),
    #[error("Invalid user ID")] InvalidUserId(String),
    #[error("User with id {0} not found")] UserNotFound(UserId),
    #[error("A user with this email already exists")] EmailConflict(String),
}
#[cfg(test)]
#[path = "../types_tests.rs"]
mod types_tests;
