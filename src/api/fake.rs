//! Canned price sources for tests

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

use super::{FetchError, PriceApi, QuoteEnvelope, SeriesEnvelope, Ticker, TickerApi};

fn decode<T: DeserializeOwned>(body: &Result<Value, FetchError>) -> Result<T, FetchError> {
    let body = body.clone()?;
    serde_json::from_value(body).map_err(|e| FetchError::InvalidResponse(e.to_string()))
}

/// Alpha Vantage stand-in; records every call as `FUNCTION:SYMBOL[:MARKET]`
pub struct FakePriceApi {
    quote: Result<Value, FetchError>,
    series: Result<Value, FetchError>,
    calls: Mutex<Vec<String>>,
}

impl FakePriceApi {
    pub fn new() -> Self {
        Self {
            quote: Ok(json!({})),
            series: Ok(json!({})),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_quote(mut self, body: Value) -> Self {
        self.quote = Ok(body);
        self
    }

    pub fn with_quote_error(mut self, error: FetchError) -> Self {
        self.quote = Err(error);
        self
    }

    pub fn with_series(mut self, body: Value) -> Self {
        self.series = Ok(body);
        self
    }

    pub fn with_series_error(mut self, error: FetchError) -> Self {
        self.series = Err(error);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PriceApi for FakePriceApi {
    async fn global_quote(&self, symbol: &str) -> Result<QuoteEnvelope, FetchError> {
        self.record(format!("GLOBAL_QUOTE:{}", symbol));
        decode(&self.quote)
    }

    async fn daily_series(&self, symbol: &str) -> Result<SeriesEnvelope, FetchError> {
        self.record(format!("TIME_SERIES_DAILY:{}", symbol));
        decode(&self.series)
    }

    async fn digital_currency_daily(
        &self,
        symbol: &str,
        market: &str,
    ) -> Result<SeriesEnvelope, FetchError> {
        self.record(format!("DIGITAL_CURRENCY_DAILY:{}:{}", symbol, market));
        decode(&self.series)
    }
}

/// Upbit stand-in
pub struct FakeTickerApi {
    response: Result<Vec<Ticker>, FetchError>,
    calls: Mutex<Vec<String>>,
}

impl FakeTickerApi {
    pub fn new(response: Result<Vec<Ticker>, FetchError>) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TickerApi for FakeTickerApi {
    async fn ticker(&self, market: &str, symbol: &str) -> Result<Vec<Ticker>, FetchError> {
        self.calls.lock().unwrap().push(format!("{}-{}", market, symbol));
        self.response.clone()
    }
}

pub fn btc_ticker(trade_price: f64, signed_change_price: f64) -> Ticker {
    Ticker {
        market: "KRW-BTC".to_string(),
        trade_price,
        signed_change_price,
    }
}

pub fn quote_body(price: &str, change: &str) -> Value {
    json!({
        "Global Quote": {
            "01. symbol": "IBM",
            "05. price": price,
            "09. change": change,
        }
    })
}

/// `days` consecutive daily bars starting at 2024-01-01; the close of day `i` is `i`
pub fn daily_series_body(days: usize) -> Value {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut series = Map::new();
    for i in 0..days {
        let date = start + Duration::days(i as i64);
        series.insert(
            date.format("%Y-%m-%d").to_string(),
            json!({ "1. open": "0.0", "4. close": format!("{}.0", i) }),
        );
    }
    json!({
        "Meta Data": { "2. Symbol": "IBM" },
        "Time Series (Daily)": series,
    })
}
