// plotdesk/src/main.rs

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use plotdesk::{chart::LineChart, plotter::Plotter, workspace::Workspace};

#[derive(Parser)]
#[command(name = "plotdesk", version, about = "Validate a single-series data file and render it as a line plot")]
struct Args {
    /// Data file to plot; bare names are looked up inside the data folder
    file: Option<PathBuf>,

    /// List selectable files in the data folder and exit
    #[arg(long)]
    list: bool,

    /// Workspace root holding the data/ and output/ folders
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    info!("---- started app ----");

    let workspace = Workspace::new(&args.root);
    workspace.bootstrap()?;

    if args.list {
        let files = workspace.selectable_files()?;
        if files.is_empty() {
            println!("no data files in {}", workspace.data_dir().display());
        }
        for file in &files {
            if let Some(name) = file.file_name() {
                println!("{}", name.to_string_lossy());
            }
        }
        return Ok(());
    }

    let Some(file) = args.file else {
        bail!("no file given; use --list to see selectable data files");
    };
    let path = workspace.resolve(&file);

    let mut plotter = Plotter::new(path);
    plotter
        .load()
        .with_context(|| format!("load {}", file.display()))?;
    let image = plotter.render(&LineChart::default(), &workspace.output_dir())?;
    println!("saved {}", image.display());
    Ok(())
}
