use async_trait::async_trait;
use reqwest::{Client as HttpClient, Url};
use tracing::debug;

use super::models::Ticker;
use crate::api::{FetchError, TickerApi};

/// Upbit ticker client, optionally routed through a CORS relay
pub struct UpbitClient {
    http_client: HttpClient,
    base_url: String,
    relay_url: Option<String>,
}

impl UpbitClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.upbit.com/v1";
    pub const DEFAULT_RELAY_URL: &'static str = "https://api.allorigins.win/raw";

    /// Create a client with a base URL and relay; `None` calls Upbit directly
    pub fn with_urls(base_url: String, relay_url: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
            relay_url,
        }
    }

    /// URL of the ticker lookup for `<market>-<symbol>`, wrapped by the relay
    /// as a percent-encoded `url` parameter when one is configured.
    pub fn request_url(&self, market: &str, symbol: &str) -> Result<Url, FetchError> {
        let ticker_url = format!("{}/ticker?markets={}-{}", self.base_url, market, symbol);

        let url = match &self.relay_url {
            Some(relay) => Url::parse_with_params(relay, &[("url", ticker_url.as_str())]),
            None => Url::parse(&ticker_url),
        };

        url.map_err(|e| FetchError::Network(format!("Invalid ticker URL: {}", e)))
    }
}

#[async_trait]
impl TickerApi for UpbitClient {
    /// GET `/ticker?markets=<market>-<symbol>`
    async fn ticker(&self, market: &str, symbol: &str) -> Result<Vec<Ticker>, FetchError> {
        let url = self.request_url(market, symbol)?;
        debug!("Upbit ticker request: {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(FetchError::Http(response.status().as_u16()));
        }

        response
            .json::<Vec<Ticker>>()
            .await
            .map_err(|e| FetchError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}
