//! Creator search: name search pagination, account/profile resolution and
//! merging into creator records.

pub mod aggregator;
pub mod creators;
pub mod metrics;
pub mod pagination;
pub mod session;

use thiserror::Error;

use crate::clients::ClientError;

pub use aggregator::CreatorSearch;
pub use creators::{enhance_creator_name, from_profiles_to_creators, shorten_address};
pub use metrics::fetch_account_metrics;
pub use pagination::{collect_ens_results, EnsSearch, PageState};
pub use session::SearchSession;

/// Page size of each name search request.
pub const DEFAULT_FIRST_VALUE: u32 = 20;
/// Offset of the first name search request.
pub const DEFAULT_SKIP_VALUE: u32 = 0;
/// Upper bound on name search requests issued for one search term.
pub const MAX_ENS_SEARCH_REQUESTS: u32 = 5;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    Request(#[from] ClientError),

    #[error("Search for '{0}' was superseded by a newer search")]
    Superseded(String),
}

/// Pagination limits of the name search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    pub page_size: u32,
    pub initial_skip: u32,
    pub max_requests: u32,
}

impl SearchSettings {
    pub fn new(page_size: u32, initial_skip: u32, max_requests: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            initial_skip,
            max_requests: max_requests.max(1),
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self::new(DEFAULT_FIRST_VALUE, DEFAULT_SKIP_VALUE, MAX_ENS_SEARCH_REQUESTS)
    }
}
