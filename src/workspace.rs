// plotdesk/src/workspace.rs

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

use crate::format::FileFormat;

pub const DATA_DIR: &str = "data";
pub const OUTPUT_DIR: &str = "output";
pub const LOG_DIR: &str = "logs";

/// Conventional folder layout around the binary: `data/` holds selectable
/// input files, `output/` receives rendered images.
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Ensure all folders required by the program exist.
    pub fn bootstrap(&self) -> Result<()> {
        for name in [DATA_DIR, OUTPUT_DIR, LOG_DIR] {
            self.ensure_dir(name)?;
        }
        Ok(())
    }

    fn ensure_dir(&self, name: &str) -> Result<()> {
        let path = self.root.join(name);
        if path.exists() {
            info!("'{name}' folder already exists");
        } else {
            fs::create_dir_all(&path).with_context(|| format!("create {}", path.display()))?;
            info!("'{name}' was created");
        }
        Ok(())
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    /// Files in `data/` with a recognized extension, lexicographic order.
    pub fn selectable_files(&self) -> Result<Vec<PathBuf>> {
        let dir = self.data_dir();
        let mut files: Vec<PathBuf> = fs::read_dir(&dir)
            .with_context(|| format!("read {}", dir.display()))?
            .filter_map(|e| e.ok().map(|x| x.path()))
            .filter(|p| p.is_file() && FileFormat::from_path(p).is_known())
            .collect();
        files.sort();
        Ok(files)
    }

    /// Bare file names are looked up inside `data/`; anything carrying a
    /// directory component is taken as-is.
    pub fn resolve(&self, file: &Path) -> PathBuf {
        let has_dir = file.parent().is_some_and(|p| !p.as_os_str().is_empty());
        if has_dir || file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir().join(file)
        }
    }
}
