//! HTTP price sources
//!
//! The fetch services talk to these traits rather than to the concrete
//! clients, so the dashboard can be driven by canned responses in tests.

pub mod alpha_vantage;
pub mod error;
pub mod upbit;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

pub use alpha_vantage::{AlphaVantageClient, QuoteEnvelope, SeriesEnvelope};
pub use error::FetchError;
pub use upbit::{Ticker, UpbitClient};

/// Stock quotes and daily series (Alpha Vantage)
#[async_trait]
pub trait PriceApi: Send + Sync {
    /// Current quote for one symbol
    async fn global_quote(&self, symbol: &str) -> Result<QuoteEnvelope, FetchError>;

    /// Compact daily time series for one stock symbol
    async fn daily_series(&self, symbol: &str) -> Result<SeriesEnvelope, FetchError>;

    /// Daily series for a crypto symbol quoted in `market`
    async fn digital_currency_daily(
        &self,
        symbol: &str,
        market: &str,
    ) -> Result<SeriesEnvelope, FetchError>;
}

/// Crypto market tickers (Upbit)
#[async_trait]
pub trait TickerApi: Send + Sync {
    async fn ticker(&self, market: &str, symbol: &str) -> Result<Vec<Ticker>, FetchError>;
}
