use chrono::NaiveDate;
use tracing::{error, info, warn};

use super::chart_service::ChartRenderer;
use super::quote_service::{parse_decimal, write_config_missing};
use crate::api::{FetchError, PriceApi, SeriesEnvelope};
use crate::config::Config;
use crate::models::series::SERIES_WINDOW;
use crate::models::{DisplayTarget, SeriesPoint};
use crate::utils::Currency;

/// Closing value field of a daily stock bar
pub const STOCK_CLOSE_KEY: &str = "4. close";

/// Closing value fields of a daily crypto bar, newest naming first.
/// Older responses carry one close per market, e.g. `4a. close (KRW)`.
pub fn crypto_close_keys(market: &str) -> Vec<String> {
    vec![STOCK_CLOSE_KEY.to_string(), format!("4a. close ({})", market)]
}

/// Map a daily series body to the most recent [`SERIES_WINDOW`] closes,
/// oldest first. `Ok(None)` when the body has no time series at all.
pub fn map_series_response(
    envelope: &SeriesEnvelope,
    close_keys: &[String],
) -> Result<Option<Vec<SeriesPoint>>, FetchError> {
    let Some(series) = envelope.time_series.as_ref() else {
        return Ok(None);
    };

    let mut points = Vec::with_capacity(SERIES_WINDOW.min(series.len()));
    for (date, bar) in series.iter().rev().take(SERIES_WINDOW) {
        let parsed_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| FetchError::InvalidResponse(format!("Bad series date '{}': {}", date, e)))?;

        let raw_close = close_keys
            .iter()
            .find_map(|key| bar.get(key))
            .ok_or_else(|| FetchError::InvalidResponse(format!("No closing value on {}", date)))?;

        points.push(SeriesPoint {
            date: parsed_date,
            value: parse_decimal("close", raw_close)?,
        });
    }

    points.reverse();
    Ok(Some(points))
}

/// Map `envelope` and draw it on `canvas_id`. Every failure is logged and
/// swallowed; the canvas keeps its previous chart unless rendering starts.
pub(crate) fn render_series(
    renderer: &mut ChartRenderer,
    canvas_id: &str,
    series_name: &str,
    envelope: &SeriesEnvelope,
    close_keys: &[String],
    currency: Currency,
) {
    let points = match map_series_response(envelope, close_keys) {
        Ok(Some(points)) => points,
        Ok(None) => {
            match envelope.note.as_deref().or(envelope.error_message.as_deref()) {
                Some(reason) => warn!("No chart data for '{}': {}", series_name, reason),
                None => warn!("No chart data for '{}'", series_name),
            }
            return;
        }
        Err(e) => {
            error!("Failed to read chart data for '{}': {}", series_name, e);
            return;
        }
    };

    let labels = points.iter().map(SeriesPoint::label).collect();
    let values = points.iter().map(|p| p.value).collect();

    match renderer.render(canvas_id, labels, values, series_name, currency) {
        Ok(handle) => info!(
            "Chart for '{}' written to {} ({} points)",
            series_name,
            handle.path.display(),
            handle.values.len()
        ),
        Err(e) => error!("Failed to render chart for '{}': {}", series_name, e),
    }
}

/// Fetch the daily series for `symbol` and chart it on the target's canvas.
///
/// Does not touch the price fields: the quote fetch owns them.
pub async fn fetch_series(
    api: &dyn PriceApi,
    config: &Config,
    renderer: &mut ChartRenderer,
    symbol: &str,
    target: &mut DisplayTarget,
) {
    target.name.set(symbol);
    target.error.clear();

    if !config.has_api_key() {
        write_config_missing(target);
        return;
    }

    let envelope = match api.daily_series(symbol).await {
        Ok(envelope) => envelope,
        Err(e) => {
            error!("Failed to load chart data for '{}': {}", symbol, e);
            return;
        }
    };

    render_series(
        renderer,
        &target.canvas_id,
        symbol,
        &envelope,
        &[STOCK_CLOSE_KEY.to_string()],
        Currency::Usd,
    );
}
