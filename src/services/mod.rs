pub mod chart_service;
pub mod crypto_service;
pub mod quote_service;
pub mod series_service;
