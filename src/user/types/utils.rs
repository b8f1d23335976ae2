use super::{User, UserError, UserId};
/// The three records every fresh store starts with.
#[must_use]
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Alice Johnson", "alice@example.com", "admin"),
        User::new(2, "Bob Smith", "bob@example.com", "user"),
        User::new(3, "Carol White", "carol@example.com", "user"),
    ]
}
/// Parse a user ID path segment (must be a base-10 integer >= 1)
pub fn parse_user_id(raw: &str) -> Result<UserId, UserError> {
    // Whole segment only: numeric prefixes such as `12abc` or `1.5` are rejected.
    match raw.trim().parse::<UserId>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(UserError::InvalidUserId(raw.to_string())),
    }
}
