use serde_json::Value;
use tracing::{debug, error, info};

use crate::api::alpha_vantage::GlobalQuote;
use crate::api::{FetchError, PriceApi, QuoteEnvelope};
use crate::config::Config;
use crate::models::{DisplayTarget, FieldStyle, Quote};
use crate::utils::{format_signed, Currency};

/// Written to every field of a display target when no API key is configured
pub const CONFIG_MISSING_MESSAGE: &str = "Please set an Alpha Vantage API key (ALPHA_VANTAGE_API_KEY)";

/// Map a `GLOBAL_QUOTE` body to a quote.
///
/// Checked in order: a non-empty quote object, a rate-limit note, an explicit
/// error message. Anything else means the symbol has no data.
pub fn map_quote_response(symbol: &str, envelope: &QuoteEnvelope) -> Result<Quote, FetchError> {
    if let Some(fields) = envelope.global_quote.as_ref().filter(|q| !q.is_empty()) {
        let global_quote: GlobalQuote = serde_json::from_value(Value::Object(fields.clone()))
            .map_err(|e| FetchError::InvalidResponse(format!("Malformed quote for {}: {}", symbol, e)))?;

        let current_price = parse_decimal("05. price", &global_quote.price)?;
        let change_amount = parse_decimal("09. change", &global_quote.change)?;
        return Ok(Quote::new(current_price, change_amount));
    }

    if envelope.note.as_deref().is_some_and(|note| !note.is_empty()) {
        return Err(FetchError::RateLimited);
    }

    if let Some(message) = envelope.error_message.as_deref().filter(|m| !m.is_empty()) {
        return Err(FetchError::Upstream(message.to_string()));
    }

    Err(FetchError::NotFound(symbol.to_string()))
}

pub(crate) fn parse_decimal(field: &str, raw: &str) -> Result<f64, FetchError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| FetchError::InvalidResponse(format!("'{}' is not a number: {:?}", field, raw)))
}

/// Write a successful quote: prefixed price, signed change, and the
/// positive/negative style on the change field.
pub fn write_quote(target: &mut DisplayTarget, quote: &Quote, currency: Currency) {
    target.price.set(currency.format(quote.current_price));

    let style = if quote.is_positive {
        FieldStyle::Positive
    } else {
        FieldStyle::Negative
    };
    target
        .change
        .set_styled(format_signed(quote.change_amount, currency.decimal_places()), style);
}

/// Mark a display target as unusable because no API key is configured
pub fn write_config_missing(target: &mut DisplayTarget) {
    target.price.set_error(CONFIG_MISSING_MESSAGE);
    target.name.set_error(CONFIG_MISSING_MESSAGE);
    target.error.set_error(CONFIG_MISSING_MESSAGE);
}

/// Fetch and display the current quote for `symbol`.
///
/// Returns whether a price was shown; the caller only fetches the chart
/// series after a success.
pub async fn fetch_quote(
    api: &dyn PriceApi,
    config: &Config,
    symbol: &str,
    target: &mut DisplayTarget,
) -> bool {
    target.begin_loading(symbol);
    debug!("Loading quote for {}", symbol);

    if !config.has_api_key() {
        write_config_missing(target);
        return false;
    }

    let result = match api.global_quote(symbol).await {
        Ok(envelope) => map_quote_response(symbol, &envelope),
        Err(e) => Err(e),
    };

    match result {
        Ok(quote) => {
            info!(
                "Quote for {}: price {} change {}",
                symbol, quote.current_price, quote.change_amount
            );
            write_quote(target, &quote, Currency::Usd);
            true
        }
        Err(e) => {
            error!("Failed to load quote for '{}': {}", symbol, e);
            target.price.set_error(e.quote_display_message());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{quote_body, FakePriceApi};
    use crate::api::error::LOAD_FAILED_MESSAGE;
    use serde_json::json;

    fn envelope(body: Value) -> QuoteEnvelope {
        serde_json::from_value(body).expect("valid envelope")
    }

    fn keyed_config() -> Config {
        Config::from_lookup(|key| (key == "ALPHA_VANTAGE_API_KEY").then(|| "demo".to_string())).unwrap()
    }

    #[test]
    fn test_maps_quote_object() {
        let quote = map_quote_response("IBM", &envelope(quote_body("182.5200", "-0.4800"))).unwrap();

        assert_eq!(quote.current_price, 182.52);
        assert_eq!(quote.change_amount, -0.48);
        assert!(!quote.is_positive);
    }

    #[test]
    fn test_rate_limit_wins_over_other_fields() {
        let body = json!({
            "Global Quote": {},
            "Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute.",
            "Error Message": "Invalid API call."
        });

        let err = map_quote_response("IBM", &envelope(body)).unwrap_err();
        assert_eq!(err, FetchError::RateLimited);
        assert_eq!(err.quote_display_message(), "API request limit exceeded");
    }

    #[test]
    fn test_upstream_error_message() {
        let body = json!({ "Error Message": "Invalid API call. Please retry or visit the documentation." });

        let err = map_quote_response("IBM", &envelope(body)).unwrap_err();
        assert_eq!(
            err,
            FetchError::Upstream("Invalid API call. Please retry or visit the documentation.".to_string())
        );
    }

    #[test]
    fn test_empty_quote_is_not_found() {
        let err = map_quote_response("ZZZZ", &envelope(json!({ "Global Quote": {} }))).unwrap_err();
        assert_eq!(err, FetchError::NotFound("ZZZZ".to_string()));
        assert!(err.to_string().contains("ZZZZ"));
    }

    #[test]
    fn test_unparseable_price_is_invalid() {
        let err = map_quote_response("IBM", &envelope(quote_body("n/a", "0.1"))).unwrap_err();
        assert!(matches!(err, FetchError::InvalidResponse(_)));
    }

    #[test]
    fn test_non_finite_numbers_are_invalid() {
        for (price, change) in [("NaN", "0.1"), ("inf", "0.1"), ("182.52", "-infinity")] {
            let err = map_quote_response("IBM", &envelope(quote_body(price, change))).unwrap_err();
            assert!(matches!(err, FetchError::InvalidResponse(_)), "{} / {}", price, change);
        }
    }

    #[test]
    fn test_change_styling_and_sign() {
        let mut target = DisplayTarget::new("stock-chart");

        write_quote(&mut target, &Quote::new(10.0, 1.25), Currency::Usd);
        assert_eq!(target.change.text, "+1.25");
        assert_eq!(target.change.style, FieldStyle::Positive);

        write_quote(&mut target, &Quote::new(10.0, 0.0), Currency::Usd);
        assert_eq!(target.change.text, "0.00");
        assert_eq!(target.change.style, FieldStyle::Positive);

        write_quote(&mut target, &Quote::new(10.0, -3.5), Currency::Usd);
        assert_eq!(target.change.text, "-3.50");
        assert_eq!(target.change.style, FieldStyle::Negative);
    }

    #[tokio::test]
    async fn test_fetch_quote_success_writes_price() {
        let api = FakePriceApi::new().with_quote(quote_body("1234.5", "2.0"));
        let mut target = DisplayTarget::new("stock-chart");

        assert!(fetch_quote(&api, &keyed_config(), "IBM", &mut target).await);
        assert_eq!(target.name.text, "IBM");
        assert_eq!(target.price.text, "$1,234.50");
        assert_eq!(target.change.text, "+2.00");
        assert_eq!(api.calls(), vec!["GLOBAL_QUOTE:IBM"]);
    }

    #[tokio::test]
    async fn test_fetch_quote_rate_limited() {
        let api = FakePriceApi::new().with_quote(json!({ "Note": "limit" }));
        let mut target = DisplayTarget::new("stock-chart");

        assert!(!fetch_quote(&api, &keyed_config(), "IBM", &mut target).await);
        assert_eq!(target.price.text, "API request limit exceeded");
        assert!(target.price.is_error());
    }

    #[tokio::test]
    async fn test_fetch_quote_network_error_is_generic() {
        let api = FakePriceApi::new().with_quote_error(FetchError::Network("connection refused".to_string()));
        let mut target = DisplayTarget::new("stock-chart");

        assert!(!fetch_quote(&api, &keyed_config(), "IBM", &mut target).await);
        assert_eq!(target.price.text, LOAD_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_fetch_quote_without_key_skips_network() {
        let api = FakePriceApi::new().with_quote(quote_body("1.0", "0.0"));
        let config = Config::from_lookup(|_| None).unwrap();
        let mut target = DisplayTarget::new("stock-chart");

        assert!(!fetch_quote(&api, &config, "IBM", &mut target).await);
        assert!(api.calls().is_empty());
        assert_eq!(target.price.text, CONFIG_MISSING_MESSAGE);
        assert_eq!(target.error.text, CONFIG_MISSING_MESSAGE);
        assert!(target.name.is_error());
    }
}
