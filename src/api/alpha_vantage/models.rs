use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use serde_json::{Map, Value};

/// Body of a `GLOBAL_QUOTE` request.
///
/// Alpha Vantage always answers 200; failures are signalled by which of these
/// fields is present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteEnvelope {
    #[serde(rename = "Global Quote", default)]
    pub global_quote: Option<Map<String, Value>>,
    /// Rate-limit notice
    #[serde(rename = "Note", default)]
    pub note: Option<String>,
    #[serde(rename = "Error Message", default)]
    pub error_message: Option<String>,
}

/// The non-empty `Global Quote` object. Numbers arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalQuote {
    #[serde(rename = "05. price")]
    pub price: String,
    #[serde(rename = "09. change")]
    pub change: String,
}

/// One day of a daily series, keyed by field name (`"1. open"`, `"4. close"`, ...)
pub type DailyBar = HashMap<String, String>;

/// Body of a `TIME_SERIES_DAILY` or `DIGITAL_CURRENCY_DAILY` request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeriesEnvelope {
    #[serde(
        rename = "Time Series (Daily)",
        alias = "Time Series (Digital Currency Daily)",
        default
    )]
    pub time_series: Option<BTreeMap<String, DailyBar>>,
    #[serde(rename = "Note", default)]
    pub note: Option<String>,
    #[serde(rename = "Error Message", default)]
    pub error_message: Option<String>,
}
