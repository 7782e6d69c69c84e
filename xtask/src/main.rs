use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{fs, path::PathBuf};

use plotdesk::{format::FileFormat, schema};

#[derive(Parser)]
#[command(name = "xtask", about = "Plotdesk workspace tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Validate a data file against the plot document schema
    ValidateData { file: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::ValidateData { file } => validate_data(&file),
    }
}

fn validate_data(path: &PathBuf) -> Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    match schema::validate(&text, FileFormat::from_path(path)) {
        Ok(record) => {
            println!("OK: {} ({} points)", path.display(), record.values.len());
            Ok(())
        }
        Err(err) => {
            eprintln!("Invalid: {}", path.display());
            eprintln!("- {}", err);
            std::process::exit(1);
        }
    }
}
