use std::time::Instant;
use tracing::info;

use crate::user::UserId;

/// Logs how long a handler took once it goes out of scope.
///
/// Handlers addressing a single record use [`OperationTimer::for_user`] so
/// the timing line carries the user id.
pub struct OperationTimer {
    operation: &'static str,
    user_id: Option<UserId>,
    started: Instant,
}

impl OperationTimer {
    #[must_use]
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            user_id: None,
            started: Instant::now(),
        }
    }

    #[must_use]
    pub fn for_user(operation: &'static str, user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::new(operation)
        }
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.started.elapsed().as_millis();
        match self.user_id {
            Some(user_id) => info!(
                operation = self.operation,
                user_id,
                elapsed_ms = %elapsed_ms,
                "User operation finished"
            ),
            None => info!(
                operation = self.operation,
                elapsed_ms = %elapsed_ms,
                "Operation finished"
            ),
        }
    }
}

/// Short correlation id stamped on each response: the first 8 hex digits
/// of a v4 uuid.
#[must_use]
pub fn generate_request_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod metrics_tests;
