// plotdesk/src/series.rs

use tracing::debug;

use crate::error::RenderError;
use crate::schema::{PlotRecord, StepDescriptor};

/// Fully resolved (x, y) pairs plus labels, ready for a chart backend.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Resolve x-values for a loaded record and pair them with its y-values.
///
/// A fixed step generates `[0*s, 1*s, ..., (n-1)*s]`; explicit steps pass
/// through verbatim and must agree in length with the y-series.
pub fn prepare(record: PlotRecord) -> Result<CoordinateSeries, RenderError> {
    let PlotRecord { title, x_label, y_label, values, step } = record;

    let x = match step {
        StepDescriptor::Explicit(steps) => {
            debug!("using custom steps for x-values");
            steps
        }
        StepDescriptor::Fixed(size) => {
            debug!(size, "generating x-values from fixed step size");
            (0..values.len()).map(|i| i as f64 * size).collect()
        }
    };

    if x.len() != values.len() {
        return Err(RenderError::AxisLengthMismatch { x_len: x.len(), y_len: values.len() });
    }

    Ok(CoordinateSeries { title, x_label, y_label, x, y: values })
}
