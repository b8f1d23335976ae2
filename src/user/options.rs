//! Validated inputs for create and update.
//!
//! Empty strings count as "not supplied" for every field. On create that
//! makes an empty name or email a validation failure and an empty role fall
//! back to [`DEFAULT_ROLE`]; on update it leaves the stored value untouched.

use super::types::{User, UserError};
use crate::utils::nonempty;

/// Role assigned when none is supplied on create.
pub const DEFAULT_ROLE: &str = "user";

pub const NAME_AND_EMAIL_REQUIRED: &str = "Name and email are required";

/// Options for creating a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserOptions {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl CreateUserOptions {
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        role: Option<String>,
    ) -> Result<Self, UserError> {
        let (Some(name), Some(email)) = (nonempty(name), nonempty(email)) else {
            return Err(UserError::ValidationError(NAME_AND_EMAIL_REQUIRED.to_string()));
        };
        Ok(Self {
            name,
            email,
            role: nonempty(role).unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        })
    }
}

/// Options for updating a user. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserOptions {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl UpdateUserOptions {
    #[must_use]
    pub fn new(name: Option<String>, email: Option<String>, role: Option<String>) -> Self {
        Self {
            name: nonempty(name),
            email: nonempty(email),
            role: nonempty(role),
        }
    }

    /// Overwrite the supplied fields of `user`.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
    }
}
