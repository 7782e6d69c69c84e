pub mod chart;
pub mod error;
pub mod format;
pub mod plotter;
pub mod schema;
pub mod series;
pub mod workspace;

pub use chart::{ChartBackend, LineChart};
pub use error::{LoadError, RenderError};
pub use format::FileFormat;
pub use plotter::Plotter;
pub use schema::{PlotRecord, StepDescriptor};
pub use series::CoordinateSeries;
pub use workspace::Workspace;
