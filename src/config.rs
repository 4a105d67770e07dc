// Configuration for:
// - HTTP server listening address/port
// - Upstream service URLs (accounts, NFT search, catalyst lambdas)
// - Outbound request timeout and rate limit
// - Name search pagination limits
// - Session cache settings (size, TTL)

use dotenv::dotenv;
use std::env;
use std::time::Duration;

use crate::search::{SearchSettings, DEFAULT_FIRST_VALUE, DEFAULT_SKIP_VALUE, MAX_ENS_SEARCH_REQUESTS};

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub accounts_api_url: String,
    pub nft_api_url: String,
    pub lambdas_url: String,
    pub request_timeout_secs: u64,
    pub request_rate_limit: Option<u32>,
    pub search_page_size: u32,
    pub search_initial_skip: u32,
    pub max_ens_search_requests: u32,
    pub session_ttl: Duration,
    pub session_max_capacity: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);
        let accounts_api_url = env::var("ACCOUNTS_API_URL")
            .unwrap_or_else(|_| "https://nft-api.decentraland.org".to_string());
        let nft_api_url = env::var("NFT_API_URL")
            .unwrap_or_else(|_| "https://nft-api.decentraland.org".to_string());
        let lambdas_url = env::var("LAMBDAS_URL")
            .unwrap_or_else(|_| "https://peer.decentraland.org/lambdas".to_string());
        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .map(|v| v.parse().unwrap_or(30))
            .unwrap_or(30);
        let request_rate_limit = env::var("REQUEST_RATE_LIMIT")
            .map(|v| v.parse().ok())
            .unwrap_or(None);
        let search_page_size = env::var("SEARCH_PAGE_SIZE")
            .map(|v| v.parse().unwrap_or(DEFAULT_FIRST_VALUE))
            .unwrap_or(DEFAULT_FIRST_VALUE);
        let search_initial_skip = env::var("SEARCH_INITIAL_SKIP")
            .map(|v| v.parse().unwrap_or(DEFAULT_SKIP_VALUE))
            .unwrap_or(DEFAULT_SKIP_VALUE);
        let max_ens_search_requests = env::var("MAX_ENS_SEARCH_REQUESTS")
            .map(|v| v.parse().unwrap_or(MAX_ENS_SEARCH_REQUESTS))
            .unwrap_or(MAX_ENS_SEARCH_REQUESTS);
        let session_ttl = env::var("SESSION_TTL")
            .unwrap_or_else(|_| "600".to_string())
            .parse()
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(600));
        let session_max_capacity = env::var("SESSION_MAX_CAPACITY")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .unwrap_or(1000);

        Self {
            server_host,
            server_port,
            accounts_api_url,
            nft_api_url,
            lambdas_url,
            request_timeout_secs,
            request_rate_limit,
            search_page_size,
            search_initial_skip,
            max_ens_search_requests,
            session_ttl,
            session_max_capacity,
        }
    }

    /// Pagination limits for the name search, clamped to at least one request of one item.
    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings::new(
            self.search_page_size,
            self.search_initial_skip,
            self.max_ens_search_requests,
        )
    }
}
