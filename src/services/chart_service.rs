use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::ChartHandle;
use crate::utils::Currency;

pub const CHART_WIDTH: u32 = 800;
pub const CHART_HEIGHT: u32 = 300;

/// `#00CC99`
const LINE_COLOR: RGBColor = RGBColor(0x00, 0xCC, 0x99);

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("{labels} labels but {values} values")]
    LengthMismatch { labels: usize, values: usize },
    #[error("Failed to draw chart: {0}")]
    Drawing(String),
    #[error("Chart file error: {0}")]
    Io(#[from] io::Error),
}

/// Draws line charts to `<chart_dir>/<canvas_id>.png` and keeps the registry
/// of live charts, one per canvas id.
pub struct ChartRenderer {
    chart_dir: PathBuf,
    charts: HashMap<String, ChartHandle>,
    next_generation: u64,
}

impl ChartRenderer {
    pub fn new(chart_dir: impl Into<PathBuf>) -> Self {
        Self {
            chart_dir: chart_dir.into(),
            charts: HashMap::new(),
            next_generation: 0,
        }
    }

    pub fn chart_dir(&self) -> &Path {
        &self.chart_dir
    }

    pub fn get(&self, canvas_id: &str) -> Option<&ChartHandle> {
        self.charts.get(canvas_id)
    }

    /// Number of live charts across all canvases
    pub fn live_count(&self) -> usize {
        self.charts.len()
    }

    /// Drop the chart bound to `canvas_id` and delete its image.
    /// Returns whether a chart existed.
    pub fn destroy(&mut self, canvas_id: &str) -> bool {
        let Some(handle) = self.charts.remove(canvas_id) else {
            return false;
        };

        match fs::remove_file(&handle.path) {
            Ok(_) => debug!("Destroyed chart {} (generation {})", canvas_id, handle.generation),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to delete chart file {}: {}", handle.path.display(), e),
        }
        true
    }

    /// Draw `values` as a line chart on `canvas_id`, replacing whatever chart
    /// was there. The previous chart is always destroyed before the new one
    /// is created, so a canvas never has two live charts.
    pub fn render(
        &mut self,
        canvas_id: &str,
        labels: Vec<String>,
        values: Vec<f64>,
        series_name: &str,
        currency: Currency,
    ) -> Result<&ChartHandle, ChartError> {
        if labels.len() != values.len() {
            return Err(ChartError::LengthMismatch {
                labels: labels.len(),
                values: values.len(),
            });
        }

        self.destroy(canvas_id);

        fs::create_dir_all(&self.chart_dir)?;
        let path = self.chart_dir.join(format!("{}.png", canvas_id));
        draw_line_chart(&path, &values)?;

        self.next_generation += 1;
        let handle = ChartHandle {
            canvas_id: canvas_id.to_string(),
            path,
            labels,
            values,
            series_name: series_name.to_string(),
            currency,
            generation: self.next_generation,
        };

        debug!(
            "Rendered chart {} with {} points to {}",
            handle.canvas_id,
            handle.values.len(),
            handle.path.display()
        );

        let handle = match self.charts.entry(canvas_id.to_string()) {
            Entry::Occupied(mut slot) => {
                slot.insert(handle);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(handle),
        };
        Ok(handle)
    }
}

/// Line with a light fill underneath; no axes, labels or legend are drawn.
fn draw_line_chart(path: &Path, values: &[f64]) -> Result<(), ChartError> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Drawing(format!("Failed to fill canvas: {}", e)))?;

    if !values.is_empty() {
        let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let value_range = (max_value - min_value).max(1e-8);
        let padding = value_range * 0.1;
        let y_min = min_value - padding;
        let y_max = max_value + padding;
        let x_max = values.len().saturating_sub(1).max(1) as f64;

        let mut chart = ChartBuilder::on(&root)
            .margin(5)
            .build_cartesian_2d(0f64..x_max, y_min..y_max)
            .map_err(|e| ChartError::Drawing(format!("Failed to build chart: {}", e)))?;

        let points = values.iter().enumerate().map(|(i, v)| (i as f64, *v));
        chart
            .draw_series(
                AreaSeries::new(points, y_min, LINE_COLOR.mix(0.1).filled())
                    .border_style(LINE_COLOR.stroke_width(2)),
            )
            .map_err(|e| ChartError::Drawing(format!("Failed to draw line: {}", e)))?;
    }

    root.present()
        .map_err(|e| ChartError::Drawing(format!("Failed to render chart: {}", e)))?;
    Ok(())
}
