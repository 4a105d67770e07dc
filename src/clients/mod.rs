pub mod account;
pub mod error;
pub mod http;
pub mod nft;
pub mod profile;

use async_trait::async_trait;

use crate::models::{Account, AccountFilters, NftSearchFilters, NftSearchPage, Profile};

// Re-exports for convenience
pub use account::AccountApi;
pub use error::ClientError;
pub use http::HttpClient;
pub use nft::NftApi;
pub use profile::LambdasClient;

/// Account metrics lookup.
#[async_trait]
pub trait AccountSource: Send + Sync {
    async fn fetch_accounts(&self, filters: &AccountFilters) -> Result<Vec<Account>, ClientError>;
}

/// Paginated NFT (name) search.
#[async_trait]
pub trait NftSource: Send + Sync {
    async fn fetch_nfts(&self, filters: &NftSearchFilters) -> Result<NftSearchPage, ClientError>;
}

/// Profiles of a list of addresses. Addresses without a profile are simply absent.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profiles(&self, addresses: &[String]) -> Result<Vec<Profile>, ClientError>;
}
