// plotdesk/src/plotter.rs

use anyhow::{Context, Result};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{error, info};

use crate::chart::{output_name, ChartBackend};
use crate::error::{LoadError, RenderError};
use crate::format::FileFormat;
use crate::schema::{self, PlotRecord};
use crate::series;

/// Lifecycle of one selected file. A record is produced at most
/// once, consumed at most once; plotting before a successful load is
/// rejected, and any failure is terminal for this file.
#[derive(Debug)]
enum State {
    Uninitialized,
    Loading,
    Loaded(PlotRecord),
    Rendered(PathBuf),
    Failed,
}

pub struct Plotter {
    path: PathBuf,
    format: FileFormat,
    state: State,
}

impl Plotter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = FileFormat::from_path(&path);
        info!(file = %path.display(), ?format, "initialized plotter");
        Self { path, format, state: State::Uninitialized }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The validated record, while one is loaded and not yet consumed.
    pub fn record(&self) -> Option<&PlotRecord> {
        match &self.state {
            State::Loaded(record) => Some(record),
            _ => None,
        }
    }

    /// Where the rendered image was saved, once plotting succeeded.
    pub fn image(&self) -> Option<&Path> {
        match &self.state {
            State::Rendered(path) => Some(path),
            _ => None,
        }
    }

    /// Read the source file and validate it into a plot record.
    pub fn load(&mut self) -> Result<(), LoadError> {
        self.state = State::Loading;
        match self.read_and_validate() {
            Ok(record) => {
                info!(file = %self.path.display(), points = record.values.len(), "data loaded");
                self.state = State::Loaded(record);
                Ok(())
            }
            Err(err) => {
                error!(file = %self.path.display(), %err, "loading failed");
                self.state = State::Failed;
                Err(err)
            }
        }
    }

    fn read_and_validate(&self) -> Result<PlotRecord, LoadError> {
        // Unknown formats are rejected before the file is even opened.
        if self.format == FileFormat::Unknown {
            return Err(LoadError::UnsupportedFormat);
        }
        info!(file = %self.path.display(), format = ?self.format, "loading data");
        let content = fs::read_to_string(&self.path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LoadError::SourceNotFound,
            _ => LoadError::Internal(err.to_string()),
        })?;
        schema::validate(&content, self.format)
    }

    /// Resolve coordinates for the loaded record and hand them to `chart`,
    /// saving the image into `out_dir`. Returns the saved image path.
    pub fn render(&mut self, chart: &dyn ChartBackend, out_dir: &Path) -> Result<PathBuf> {
        info!(file = %self.path.display(), "plotting data");
        let record = match std::mem::replace(&mut self.state, State::Failed) {
            State::Loaded(record) => record,
            previous => {
                error!(file = %self.path.display(), "plotting requested before data was loaded");
                self.state = previous;
                return Err(RenderError::NotLoaded.into());
            }
        };

        let series = series::prepare(record).inspect_err(
            |err| error!(file = %self.path.display(), %err, "plot preparation failed"),
        )?;

        let out = out_dir.join(output_name());
        chart
            .draw(&series, &out)
            .with_context(|| format!("draw chart for {}", self.path.display()))?;
        info!(image = %out.display(), "plot saved");
        self.state = State::Rendered(out.clone());
        Ok(out)
    }
}
