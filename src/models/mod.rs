//! Data models for the dashboard
//!
//! Every value here is transient: produced by a fetch, written to a display
//! target or a chart, then dropped.

pub mod chart;
pub mod display;
pub mod quote;
pub mod series;

pub use chart::ChartHandle;
pub use display::{DisplayTarget, FieldStyle, TextField};
pub use quote::Quote;
pub use series::SeriesPoint;
