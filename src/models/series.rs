//! Daily series models

use chrono::NaiveDate;

/// Number of most recent daily closes kept for a chart
pub const SERIES_WINDOW: usize = 60;

/// A single daily close on a price chart
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl SeriesPoint {
    /// Chart label, `YYYY-MM-DD`
    pub fn label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
