use academy_client::RetryPolicy;

use std::time::Duration;

/// Per-query fetch behavior
#[derive(Debug, Clone)]
pub struct QueryOptions {
    pub retry: RetryPolicy,
    /// Age after which a cached value is refetched; `None` keeps it until invalidated
    pub stale_after: Option<Duration>,
}

impl QueryOptions {
    pub fn new(retry: RetryPolicy) -> Self {
        Self {
            retry,
            stale_after: None,
        }
    }

    /// Single attempt, errors surface immediately
    pub fn no_retry() -> Self {
        Self::new(RetryPolicy::none())
    }

    pub fn with_stale_after(mut self, stale_after: Duration) -> Self {
        self.stale_after = Some(stale_after);
        self
    }
}
