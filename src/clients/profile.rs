use crate::clients::{error::ClientError, http::{endpoint, HttpClient}, ProfileSource};
use crate::models::Profile;
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
struct ProfilesRequest<'a> {
    ids: &'a [String],
}

/// Client for the catalyst lambdas profile lookup.
#[derive(Clone)]
pub struct LambdasClient {
    http: HttpClient,
    base_url: String,
}

impl LambdasClient {
    pub fn new(http: HttpClient, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl ProfileSource for LambdasClient {
    async fn fetch_profiles(&self, addresses: &[String]) -> Result<Vec<Profile>, ClientError> {
        let url = endpoint(&self.base_url, "/profiles");
        let profiles: Vec<Profile> = self
            .http
            .post_json(&url, &ProfilesRequest { ids: addresses })
            .await?;
        debug!("Fetched {} profiles for {} addresses", profiles.len(), addresses.len());
        Ok(profiles)
    }
}
