use thiserror::Error;

/// Generic text written to a price field when the failure is not worth showing verbatim
pub const LOAD_FAILED_MESSAGE: &str = "load failed";

/// Failure of a single price or series request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// No Alpha Vantage API key configured; no request was made
    #[error("Alpha Vantage API key is not configured")]
    ConfigMissing,
    /// The provider answered with a rate-limit note
    #[error("API request limit exceeded")]
    RateLimited,
    /// The provider answered with an explicit error message
    #[error("API error: {0}")]
    Upstream(String),
    /// No data for the symbol
    #[error("no current-price data found for '{0}'; verify the ticker")]
    NotFound(String),
    /// Non-2xx status
    #[error("HTTP error! status: {0}")]
    Http(u16),
    /// The request itself failed
    #[error("request failed: {0}")]
    Network(String),
    /// The body could not be decoded, or a number in it could not be parsed
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl FetchError {
    /// Errors reported by the price API itself (rate limit, explicit message)
    pub fn is_api_error(&self) -> bool {
        matches!(self, FetchError::RateLimited | FetchError::Upstream(_))
    }

    pub fn is_http_error(&self) -> bool {
        matches!(self, FetchError::Http(_))
    }

    /// Text for the price field after a failed quote: API errors are shown
    /// verbatim, everything else collapses to a generic message.
    pub fn quote_display_message(&self) -> String {
        if self.is_api_error() {
            self.to_string()
        } else {
            LOAD_FAILED_MESSAGE.to_string()
        }
    }

    /// Text for the price field after a failed crypto ticker: only HTTP
    /// status errors are shown verbatim.
    pub fn ticker_display_message(&self) -> String {
        if self.is_http_error() {
            self.to_string()
        } else {
            LOAD_FAILED_MESSAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_message_shows_api_errors_only() {
        assert_eq!(FetchError::RateLimited.quote_display_message(), "API request limit exceeded");
        assert_eq!(
            FetchError::Upstream("Invalid API call".to_string()).quote_display_message(),
            "API error: Invalid API call"
        );
        assert_eq!(FetchError::NotFound("ZZZZ".to_string()).quote_display_message(), LOAD_FAILED_MESSAGE);
        assert_eq!(FetchError::Network("timed out".to_string()).quote_display_message(), LOAD_FAILED_MESSAGE);
    }

    #[test]
    fn test_ticker_message_shows_http_errors_only() {
        assert_eq!(FetchError::Http(503).ticker_display_message(), "HTTP error! status: 503");
        assert_eq!(FetchError::NotFound("BTC".to_string()).ticker_display_message(), LOAD_FAILED_MESSAGE);
    }
}
