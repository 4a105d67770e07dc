use crate::config::Config;
use crate::clients::error::ClientError;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Error payload returned by the marketplace services on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Shared JSON-over-HTTP transport for the upstream clients.
///
/// Cloning is cheap: the connection pool and the optional rate limiter are shared.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        let inner = reqwest::Client::builder().timeout(timeout).build()?;

        let limiter = config
            .request_rate_limit
            .and_then(NonZeroU32::new)
            .map(|per_second| Arc::new(RateLimiter::direct(Quota::per_second(per_second))));

        info!(
            "Initializing upstream HTTP client, timeout: {:?}, rate limit: {:?}",
            timeout, config.request_rate_limit
        );

        Ok(Self { inner, limiter })
    }

    /// Client without throttling, used where no config is at hand.
    pub fn unthrottled() -> Self {
        Self {
            inner: reqwest::Client::new(),
            limiter: None,
        }
    }

    async fn throttle(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        self.throttle().await;
        debug!("GET {} {:?}", url, query);
        let response = self.inner.get(url).query(query).send().await?;
        Self::read_json(response).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.throttle().await;
        debug!("POST {}", url);
        let response = self.inner.post(url).json(body).send().await?;
        Self::read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        warn!("Upstream request to {} failed with status {}", url, status);

        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(ErrorBody { message: Some(message), .. }) | Ok(ErrorBody { error: Some(message), .. }) => {
                Err(ClientError::Api(message))
            }
            _ => Err(ClientError::Status {
                status: status.as_u16(),
            }),
        }
    }
}

/// Joins a base URL and a path without doubling the slash.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
