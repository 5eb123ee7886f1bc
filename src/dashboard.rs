//! The page: two display targets, the chart registry, and the two flows that
//! drive them (initial load and symbol search).

use std::sync::Arc;

use tracing::{debug, info};

use crate::api::{AlphaVantageClient, PriceApi, TickerApi, UpbitClient};
use crate::config::Config;
use crate::models::{DisplayTarget, TextField};
use crate::services::chart_service::ChartRenderer;
use crate::services::crypto_service::{fetch_crypto, CryptoPair};
use crate::services::quote_service::fetch_quote;
use crate::services::series_service::fetch_series;
use crate::utils::Table;

pub const CRYPTO_CANVAS_ID: &str = "bitcoin-chart";
pub const STOCK_CANVAS_ID: &str = "stock-chart";

pub const ENTER_TICKER_MESSAGE: &str = "Please enter a ticker.";
pub const CRYPTO_KEY_REQUIRED_MESSAGE: &str = "API key required";
pub const SEARCH_KEY_REQUIRED_MESSAGE: &str =
    "Set ALPHA_VANTAGE_API_KEY to enable stock search and the Bitcoin chart.";

pub struct Dashboard {
    config: Config,
    prices: Arc<dyn PriceApi>,
    tickers: Arc<dyn TickerApi>,
    charts: ChartRenderer,
    crypto_pair: CryptoPair,
    pub crypto: DisplayTarget,
    pub search: DisplayTarget,
    /// Whether the search result panel is shown
    pub result_visible: bool,
}

impl Dashboard {
    pub fn new(config: Config, prices: Arc<dyn PriceApi>, tickers: Arc<dyn TickerApi>) -> Self {
        let charts = ChartRenderer::new(config.chart_dir.clone());
        Self {
            config,
            prices,
            tickers,
            charts,
            crypto_pair: CryptoPair::bitcoin(),
            crypto: DisplayTarget::new(CRYPTO_CANVAS_ID),
            search: DisplayTarget::new(STOCK_CANVAS_ID),
            result_visible: false,
        }
    }

    /// Build the dashboard against the real Alpha Vantage and Upbit endpoints
    pub fn from_config(config: Config) -> Self {
        let prices = AlphaVantageClient::with_base_url(
            config.api_key.clone(),
            config.alpha_vantage_url.clone(),
        );
        let tickers = UpbitClient::with_urls(config.upbit_url.clone(), config.relay_url.clone());
        Self::new(config, Arc::new(prices), Arc::new(tickers))
    }

    pub fn charts(&self) -> &ChartRenderer {
        &self.charts
    }

    /// Initial load: hide the search panel and show the crypto price.
    ///
    /// Without an API key nothing is requested; both panels explain why.
    pub async fn load(&mut self) {
        self.result_visible = false;

        if !self.config.has_api_key() {
            info!("No Alpha Vantage API key configured; skipping initial load");
            self.search.error.set_error(SEARCH_KEY_REQUIRED_MESSAGE);
            self.crypto.price.set_error(CRYPTO_KEY_REQUIRED_MESSAGE);
            return;
        }

        fetch_crypto(
            self.tickers.as_ref(),
            self.prices.as_ref(),
            &self.config,
            &mut self.charts,
            &self.crypto_pair,
            &mut self.crypto,
        )
        .await;
    }

    /// Look up `input` as a stock ticker.
    ///
    /// The chart series is requested only after the quote succeeded, and only
    /// after `series_delay` so the two calls are not sent back to back.
    pub async fn search(&mut self, input: &str) {
        let symbol = input.trim().to_uppercase();
        self.result_visible = true;

        if symbol.is_empty() {
            self.search.name.clear();
            self.search.price.clear();
            self.search.change.clear();
            self.search.error.set_error(ENTER_TICKER_MESSAGE);
            return;
        }

        info!("Searching for {}", symbol);
        let found = fetch_quote(self.prices.as_ref(), &self.config, &symbol, &mut self.search).await;
        if !found {
            debug!("No price for {}; chart not requested", symbol);
            return;
        }

        tokio::time::sleep(self.config.series_delay).await;

        fetch_series(
            self.prices.as_ref(),
            &self.config,
            &mut self.charts,
            &symbol,
            &mut self.search,
        )
        .await;
    }

    /// Text rendition of the page
    pub fn render(&self) -> String {
        let mut table = Table::new(vec!["Asset", "Price", "Change", "Chart"]);
        table.add_row(self.target_row(&self.crypto, &self.crypto_pair.display_name));
        if self.result_visible {
            table.add_row(self.target_row(&self.search, "Search"));
        }

        let mut output = table.render();

        for field in [&self.crypto.error, &self.search.error] {
            if field.is_error() && !field.text.is_empty() {
                output.push_str(&field.render());
                output.push('\n');
            }
        }

        output.push_str(&format!(
            "{} chart(s) in {}\n",
            self.charts.live_count(),
            self.charts.chart_dir().display()
        ));
        output
    }

    fn target_row(&self, target: &DisplayTarget, fallback_name: &str) -> Vec<String> {
        let name = if target.name.text.is_empty() {
            fallback_name.to_string()
        } else {
            target.name.render()
        };

        vec![
            name,
            field_or_dash(&target.price),
            field_or_dash(&target.change),
            self.chart_summary(&target.canvas_id),
        ]
    }

    /// `<path> (<first date> .. <last date>, last <tooltip>)`
    fn chart_summary(&self, canvas_id: &str) -> String {
        let Some(handle) = self.charts.get(canvas_id) else {
            return "-".to_string();
        };

        let (Some(first), Some(last)) = (handle.labels.first(), handle.labels.last()) else {
            return handle.path.display().to_string();
        };

        let latest = handle
            .tooltip(handle.values.len().saturating_sub(1))
            .unwrap_or_default();
        format!("{} ({} .. {}, last {})", handle.path.display(), first, last, latest)
    }
}

fn field_or_dash(field: &TextField) -> String {
    let rendered = field.render();
    if rendered.is_empty() {
        "-".to_string()
    } else {
        rendered
    }
}
