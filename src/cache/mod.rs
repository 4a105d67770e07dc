//! Search session cache implementation using Moka

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use crate::config::Config;
use crate::search::SearchSession;

/// Session id used when the caller does not send one.
pub const ANONYMOUS_SESSION: &str = "anonymous";

/// Keeps the search session of every caller, evicting idle ones.
#[derive(Clone)]
pub struct SessionCacheManager {
    cache: Cache<String, Arc<SearchSession>>,
}

impl SessionCacheManager {
    /// Create a new session cache manager
    pub fn new(capacity: u64, idle_ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_idle(idle_ttl)
            .build();

        Self { cache }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.session_max_capacity, config.session_ttl)
    }

    /// The session for `session_id`, created empty on first use.
    pub async fn session(&self, session_id: &str) -> Arc<SearchSession> {
        self.cache
            .get_with(session_id.to_string(), async {
                debug!("Creating search session: {}", session_id);
                Arc::new(SearchSession::new())
            })
            .await
    }

    /// Drop the session so its next search starts from an empty cache
    pub async fn invalidate(&self, session_id: &str) {
        self.cache.invalidate(session_id).await;
        debug!("Invalidated search session: {}", session_id);
    }
}
