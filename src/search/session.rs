use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::models::{SearchCache, SearchOutcome};
use crate::search::{CreatorSearch, SearchError};

struct InFlight {
    generation: u64,
    token: CancellationToken,
}

/// Search state of one caller.
///
/// Only the most recent search may store its result: starting a search
/// cancels the one in flight, and a search that finishes after a newer one
/// started is reported as superseded.
pub struct SearchSession {
    cache: Mutex<SearchCache>,
    in_flight: Mutex<InFlight>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self::with_cache(SearchCache::default())
    }

    pub fn with_cache(cache: SearchCache) -> Self {
        Self {
            cache: Mutex::new(cache),
            in_flight: Mutex::new(InFlight {
                generation: 0,
                token: CancellationToken::new(),
            }),
        }
    }

    pub async fn cache(&self) -> SearchCache {
        self.cache.lock().await.clone()
    }

    pub async fn search(
        &self,
        aggregator: &CreatorSearch,
        term: &str,
    ) -> Result<SearchOutcome, SearchError> {
        let (generation, token) = {
            let mut in_flight = self.in_flight.lock().await;
            in_flight.token.cancel();
            in_flight.generation += 1;
            in_flight.token = CancellationToken::new();
            (in_flight.generation, in_flight.token.clone())
        };

        let snapshot = self.cache().await;

        let outcome = tokio::select! {
            _ = token.cancelled() => {
                debug!("Search for '{}' cancelled by a newer search", term);
                return Err(SearchError::Superseded(term.to_string()));
            }
            outcome = aggregator.search_creators(term, &snapshot) => outcome?,
        };

        // Hold the cache lock across the check so a newer search cannot store in between.
        let mut cache = self.cache.lock().await;
        if self.in_flight.lock().await.generation != generation {
            info!("Discarding stale result for search term '{}'", term);
            return Err(SearchError::Superseded(term.to_string()));
        }
        *cache = outcome.cache.clone();

        Ok(outcome)
    }
}
