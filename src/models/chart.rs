//! Chart registry models

use std::path::PathBuf;

use crate::utils::Currency;

/// A live chart bound to one canvas id.
///
/// Owned by the chart renderer's registry; at most one exists per canvas.
#[derive(Debug, Clone)]
pub struct ChartHandle {
    pub canvas_id: String,
    pub path: PathBuf,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub series_name: String,
    pub currency: Currency,
    /// Increases with every render across all canvases
    pub generation: u64,
}

impl ChartHandle {
    /// Hover text for the point at `index`: `<series>: <formatted value>`
    pub fn tooltip(&self, index: usize) -> Option<String> {
        let value = self.values.get(index)?;
        if self.series_name.is_empty() {
            return Some(self.currency.format(*value));
        }
        Some(format!("{}: {}", self.series_name, self.currency.format(*value)))
    }
}
