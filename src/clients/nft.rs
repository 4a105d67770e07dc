use crate::clients::{error::ClientError, http::{endpoint, HttpClient}, NftSource};
use crate::models::{NftSearchFilters, NftSearchPage};
use async_trait::async_trait;
use tracing::debug;

/// Client for the NFT listing endpoint, used here for name (ENS) search.
#[derive(Clone)]
pub struct NftApi {
    http: HttpClient,
    base_url: String,
}

impl NftApi {
    pub fn new(http: HttpClient, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl NftSource for NftApi {
    async fn fetch_nfts(&self, filters: &NftSearchFilters) -> Result<NftSearchPage, ClientError> {
        let url = endpoint(&self.base_url, "/v1/nfts");
        let page: NftSearchPage = self.http.get_json(&url, &filters.to_query()).await?;
        debug!(
            "Name search '{}' skip {} returned {} results (total {})",
            filters.search,
            filters.skip,
            page.data.len(),
            page.total
        );
        Ok(page)
    }
}
