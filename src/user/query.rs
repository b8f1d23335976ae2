//! Listing queries: role filter, case-insensitive search and pagination.

use super::types::User;
use crate::utils::nonempty;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 100;

/// Raw query-string parameters for `GET /users`.
///
/// Numbers are kept as strings so that malformed values fall back to their
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default)]
pub struct ListUsersParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub role: Option<String>,
    pub search: Option<String>,
}

impl ListUsersParams {
    /// Collect parameters from decoded query pairs. The first occurrence of a
    /// key wins and unknown keys are ignored.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                "role" => &mut params.role,
                "search" => &mut params.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// A normalized listing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub limit: usize,
    pub role: Option<String>,
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            role: None,
            search: None,
        }
    }
}

impl ListQuery {
    #[must_use]
    pub fn from_params(params: ListUsersParams) -> Self {
        Self {
            page: parse_clamped(params.page.as_deref(), DEFAULT_PAGE, usize::MAX),
            limit: parse_clamped(params.limit.as_deref(), DEFAULT_LIMIT, MAX_LIMIT),
            role: nonempty(params.role),
            search: nonempty(params.search),
        }
    }

    fn matches(&self, user: &User) -> bool {
        if let Some(role) = &self.role {
            if user.role != *role {
                return false;
            }
        }
        self.search.as_ref().is_none_or(|needle| {
            let needle = needle.to_lowercase();
            user.name.to_lowercase().contains(&needle) || user.email.to_lowercase().contains(&needle)
        })
    }
}

/// Parse an integer parameter. Unparseable input yields `default`; anything
/// parseable is clamped to `[1, max]`.
fn parse_clamped(raw: Option<&str>, default: usize, max: usize) -> usize {
    match raw.map(str::trim).and_then(|s| s.parse::<i64>().ok()) {
        Some(value) => usize::try_from(value).unwrap_or(1).clamp(1, max),
        None => default,
    }
}

/// One page of listing results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    pub users: Vec<User>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

/// Filter `users` by the query and cut out the requested page.
///
/// The requested page is clamped to the last page, and an empty result still
/// reports one page.
#[must_use]
pub fn paginate(users: &[User], query: &ListQuery) -> UserPage {
    let limit = query.limit.max(1);
    let matched: Vec<&User> = users.iter().filter(|u| query.matches(u)).collect();
    let total = matched.len();
    let total_pages = total.div_ceil(limit).max(1);
    let page = query.page.clamp(1, total_pages);
    let offset = page.saturating_sub(1).saturating_mul(limit);
    UserPage {
        users: matched.into_iter().skip(offset).take(limit).cloned().collect(),
        total,
        page,
        limit,
        total_pages,
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod query_tests;
