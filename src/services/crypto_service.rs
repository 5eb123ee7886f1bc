use tracing::{debug, error, info, warn};

use super::chart_service::ChartRenderer;
use super::quote_service::write_quote;
use super::series_service::{crypto_close_keys, render_series};
use crate::api::{FetchError, PriceApi, Ticker, TickerApi};
use crate::config::Config;
use crate::models::{DisplayTarget, Quote};
use crate::utils::Currency;

/// A crypto asset on one quote market, e.g. BTC on KRW
#[derive(Debug, Clone)]
pub struct CryptoPair {
    pub symbol: String,
    pub market: String,
    pub display_name: String,
}

impl CryptoPair {
    pub fn new(symbol: &str, market: &str, display_name: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            market: market.to_string(),
            display_name: display_name.to_string(),
        }
    }

    pub fn bitcoin() -> Self {
        Self::new("BTC", "KRW", "Bitcoin")
    }
}

/// The first ticker entry carries the price; an empty array means no data.
pub fn map_ticker_response(symbol: &str, tickers: &[Ticker]) -> Result<Quote, FetchError> {
    let ticker = tickers
        .first()
        .ok_or_else(|| FetchError::NotFound(symbol.to_string()))?;
    debug!("Ticker {}: trade price {}", ticker.market, ticker.trade_price);
    Ok(Quote::new(ticker.trade_price, ticker.signed_change_price))
}

/// Show the current price of `pair`, then chart its daily closes.
///
/// A failed price does not stop the chart request. The chart needs the
/// Alpha Vantage key; without it only a warning is logged.
pub async fn fetch_crypto(
    tickers: &dyn TickerApi,
    prices: &dyn PriceApi,
    config: &Config,
    renderer: &mut ChartRenderer,
    pair: &CryptoPair,
    target: &mut DisplayTarget,
) {
    target.begin_loading(&pair.display_name);

    let result = match tickers.ticker(&pair.market, &pair.symbol).await {
        Ok(entries) => map_ticker_response(&pair.symbol, &entries),
        Err(e) => Err(e),
    };

    match result {
        Ok(quote) => {
            info!(
                "{}-{}: price {} change {}",
                pair.market, pair.symbol, quote.current_price, quote.change_amount
            );
            write_quote(target, &quote, Currency::Krw);
        }
        Err(e) => {
            error!("Failed to load {} price: {}", pair.display_name, e);
            target.price.set_error(e.ticker_display_message());
        }
    }

    if !config.has_api_key() {
        warn!(
            "Alpha Vantage API key is not configured; the {} chart cannot be loaded",
            pair.display_name
        );
        return;
    }

    match prices.digital_currency_daily(&pair.symbol, &pair.market).await {
        Ok(envelope) => render_series(
            renderer,
            &target.canvas_id,
            &pair.symbol,
            &envelope,
            &crypto_close_keys(&pair.market),
            Currency::Krw,
        ),
        Err(e) => error!("Failed to load {} chart data: {}", pair.display_name, e),
    }
}
