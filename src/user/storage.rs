//! User storage: the `UserStore` trait and its in-memory implementation.

use super::options::{CreateUserOptions, UpdateUserOptions};
use super::query::{paginate, ListQuery, UserPage};
use super::types::{seed_users, User, UserError, UserId};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

/// Storage backend for user records.
///
/// Every operation is atomic with respect to the others: a create checks
/// email uniqueness and appends under the same lock.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// List users matching the query, one page at a time.
    async fn list_users(&self, query: &ListQuery) -> UserPage;

    async fn get_user(&self, id: UserId) -> Result<User, UserError>;

    /// Create a user with the next free id, appended after existing records.
    async fn create_user(&self, options: CreateUserOptions) -> Result<User, UserError>;

    /// Merge the supplied fields into an existing user.
    async fn update_user(&self, id: UserId, options: UpdateUserOptions) -> Result<User, UserError>;

    /// Remove a user and return the removed record.
    async fn delete_user(&self, id: UserId) -> Result<User, UserError>;
}

/// Check if a user with the given email already exists.
#[must_use]
pub fn find_user_by_email<'a>(users: &'a [User], email: &str) -> Option<&'a User> {
    users.iter().find(|u| u.email == email)
}

/// Check if a user with the given ID already exists.
#[must_use]
pub fn find_user_by_id(users: &[User], id: UserId) -> Option<&User> {
    users.iter().find(|u| u.id == id)
}

struct UsersState {
    users: Vec<User>,
    /// Always greater than every id ever handed out.
    next_id: UserId,
}

/// Process-memory store. Data is lost when the process exits.
pub struct InMemoryUserStore {
    state: RwLock<UsersState>,
}

impl InMemoryUserStore {
    /// An empty store whose first id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::from_users(Vec::new())
    }

    /// A store holding the three seed users, next id 4.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_users(seed_users())
    }

    fn from_users(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .map(|u| u.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        Self {
            state: RwLock::new(UsersState { users, next_id }),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list_users(&self, query: &ListQuery) -> UserPage {
        let state = self.state.read().await;
        paginate(&state.users, query)
    }

    async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        let state = self.state.read().await;
        find_user_by_id(&state.users, id)
            .cloned()
            .ok_or(UserError::UserNotFound(id))
    }

    async fn create_user(&self, options: CreateUserOptions) -> Result<User, UserError> {
        let mut state = self.state.write().await;
        if find_user_by_email(&state.users, &options.email).is_some() {
            return Err(UserError::EmailConflict(options.email));
        }
        let user = User {
            id: state.next_id,
            name: options.name,
            email: options.email,
            role: options.role,
        };
        state.next_id = state.next_id.saturating_add(1);
        state.users.push(user.clone());
        info!("Created user: {}", user.id);
        Ok(user)
    }

    async fn update_user(&self, id: UserId, options: UpdateUserOptions) -> Result<User, UserError> {
        let mut state = self.state.write().await;
        if find_user_by_id(&state.users, id).is_none() {
            return Err(UserError::UserNotFound(id));
        }
        if let Some(email) = &options.email {
            if state.users.iter().any(|u| u.email == *email && u.id != id) {
                return Err(UserError::EmailConflict(email.clone()));
            }
        }
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(UserError::UserNotFound(id))?;
        options.apply(user);
        let updated_user = user.clone();
        info!("Updated user: {}", id);
        Ok(updated_user)
    }

    async fn delete_user(&self, id: UserId) -> Result<User, UserError> {
        let mut state = self.state.write().await;
        let user_idx = state
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(UserError::UserNotFound(id))?;
        let deleted = state.users.remove(user_idx);
        info!("Deleted user: {}", id);
        Ok(deleted)
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
