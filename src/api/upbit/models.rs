use serde::Deserialize;

/// One entry of the `/v1/ticker` response array
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ticker {
    /// e.g. `KRW-BTC`
    pub market: String,
    pub trade_price: f64,
    /// Change against the previous close, negative when falling
    pub signed_change_price: f64,
}
