use crate::clients::{error::ClientError, http::{endpoint, HttpClient}, AccountSource};
use crate::models::{Account, AccountFilters};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct AccountResponse {
    #[serde(default)]
    pub data: Vec<Account>,
    #[serde(default)]
    pub total: u64,
}

/// Client for the accounts (creator metrics) endpoint of the marketplace API.
#[derive(Clone)]
pub struct AccountApi {
    http: HttpClient,
    base_url: String,
}

impl AccountApi {
    pub fn new(http: HttpClient, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    pub async fn fetch(&self, filters: &AccountFilters) -> Result<AccountResponse, ClientError> {
        let url = endpoint(&self.base_url, "/v1/accounts");
        let response: AccountResponse = self.http.get_json(&url, &filters.to_query()).await?;
        debug!("Fetched {} of {} accounts", response.data.len(), response.total);
        Ok(response)
    }
}

#[async_trait]
impl AccountSource for AccountApi {
    async fn fetch_accounts(&self, filters: &AccountFilters) -> Result<Vec<Account>, ClientError> {
        Ok(self.fetch(filters).await?.data)
    }
}
