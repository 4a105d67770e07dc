pub mod api;
pub mod cache;
pub mod clients;
pub mod config;
pub mod models;
pub mod search;
pub mod state;
pub mod validation;

#[cfg(test)]
pub mod tests;

use std::sync::Arc;

// Re-export specific items for convenience
pub use api::error::ApiError;
pub use api::response::ApiResponse;
pub use api::route::{create_router, CreatorsQuery, MetricsQuery};
pub use models::{CreatorAccount, SearchCache, SearchOutcome};
pub use search::{CreatorSearch, SearchError, SearchSession};

/// Builds the search aggregator over the live upstream services in `config`.
pub fn build_search(config: &config::Config) -> Result<CreatorSearch, clients::ClientError> {
    let http = clients::HttpClient::new(config)?;

    Ok(CreatorSearch::new(
        Arc::new(clients::AccountApi::new(http.clone(), &config.accounts_api_url)),
        Arc::new(clients::NftApi::new(http.clone(), &config.nft_api_url)),
        Arc::new(clients::LambdasClient::new(http, &config.lambdas_url)),
        config.search_settings(),
    ))
}
