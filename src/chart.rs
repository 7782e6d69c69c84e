// plotdesk/src/chart.rs

use anyhow::{Context, Result};
use chrono::Local;
use plotters::prelude::*;
use std::path::Path;

use crate::series::CoordinateSeries;

/// Drawing collaborator. Given a resolved series it draws a labeled chart
/// and persists it at `out`.
pub trait ChartBackend {
    fn draw(&self, series: &CoordinateSeries, out: &Path) -> Result<()>;
}

/// Image name for a rendered plot, e.g. `Plot_05082026-143027.png`.
pub fn output_name() -> String {
    format!("Plot_{}.png", Local::now().format("%d%m%Y-%H%M%S"))
}

/// Bitmap line chart with point markers, titled and labeled from the series.
pub struct LineChart {
    pub width: u32,
    pub height: u32,
}

impl Default for LineChart {
    fn default() -> Self {
        Self { width: 1000, height: 600 }
    }
}

impl ChartBackend for LineChart {
    fn draw(&self, series: &CoordinateSeries, out: &Path) -> Result<()> {
        let root = BitMapBackend::new(out, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&series.title, ("sans-serif", 32))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(axis_range(&series.x), axis_range(&series.y))?;

        chart
            .configure_mesh()
            .x_desc(series.x_label.as_str())
            .y_desc(series.y_label.as_str())
            .draw()?;

        let points = series.x.iter().zip(&series.y).map(|(&x, &y)| (x, y));
        chart.draw_series(LineSeries::new(points.clone(), &BLUE))?;
        chart.draw_series(points.map(|p| Circle::new(p, 3, BLUE.filled())))?;

        root.present().with_context(|| format!("write {}", out.display()))?;
        Ok(())
    }
}

/// Padded axis range; degenerate inputs (single point, empty series) still
/// give a drawable non-zero span.
fn axis_range(values: &[f64]) -> std::ops::Range<f64> {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    if lo == hi {
        return (lo - 0.5)..(hi + 0.5);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad)..(hi + pad)
}
