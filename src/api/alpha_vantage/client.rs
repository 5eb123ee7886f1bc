use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::models::{QuoteEnvelope, SeriesEnvelope};
use crate::api::{FetchError, PriceApi};
use crate::config::ApiKey;

/// Alpha Vantage client for stock quotes and daily series
pub struct AlphaVantageClient {
    http_client: HttpClient,
    api_key: Option<ApiKey>,
    base_url: String,
}

impl AlphaVantageClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.alphavantage.co/query";

    /// Create a new Alpha Vantage client.
    ///
    /// Without a key every request fails with [`FetchError::ConfigMissing`]
    /// before touching the network.
    pub fn with_base_url(api_key: Option<ApiKey>, base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url,
        }
    }

    /// GET `<base_url>?function=...&apikey=...`
    ///
    /// The body is decoded whatever it contains; callers inspect the envelope
    /// to tell data from notes and error messages.
    async fn query<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, FetchError> {
        let api_key = self.api_key.as_ref().ok_or(FetchError::ConfigMissing)?;

        debug!("Alpha Vantage request: {:?}", params);

        let response = self
            .http_client
            .get(&self.base_url)
            .query(params)
            .query(&[("apikey", api_key.as_str())])
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(FetchError::Http(response.status().as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl PriceApi for AlphaVantageClient {
    /// GET `function=GLOBAL_QUOTE`
    async fn global_quote(&self, symbol: &str) -> Result<QuoteEnvelope, FetchError> {
        self.query(&[("function", "GLOBAL_QUOTE"), ("symbol", symbol)])
            .await
    }

    /// GET `function=TIME_SERIES_DAILY&outputsize=compact` (latest 100 days)
    async fn daily_series(&self, symbol: &str) -> Result<SeriesEnvelope, FetchError> {
        self.query(&[
            ("function", "TIME_SERIES_DAILY"),
            ("symbol", symbol),
            ("outputsize", "compact"),
        ])
        .await
    }

    /// GET `function=DIGITAL_CURRENCY_DAILY`
    async fn digital_currency_daily(
        &self,
        symbol: &str,
        market: &str,
    ) -> Result<SeriesEnvelope, FetchError> {
        self.query(&[
            ("function", "DIGITAL_CURRENCY_DAILY"),
            ("symbol", symbol),
            ("market", market),
        ])
        .await
    }
}
