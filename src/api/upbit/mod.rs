pub mod client;
pub mod models;

pub use client::UpbitClient;
pub use models::Ticker;
