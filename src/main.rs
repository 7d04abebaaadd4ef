use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use graphsum::error::GraphError;
use graphsum::export::{self, ExportData, ExportFormat};
use graphsum::parser;

#[derive(Parser)]
#[command(name = "graphsum")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(
    about = "Load a plain-text graph file and report its vertices and edges",
    long_about = None
)]
struct Cli {
    /// Path to the graph file
    file: Option<PathBuf>,

    /// Output format: text, json, markdown
    #[arg(short, long, default_value = "text")]
    format: ExportFormat,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Loads the graph named on the command line and writes its report to `out`.
fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let path = cli.file.as_deref().ok_or(GraphError::MissingArgument)?;
    let graph = parser::parse_file(path)?;
    info!(path = %path.display(), kind = %graph.kind(), "loaded graph");

    let data = ExportData::new(path.display().to_string(), &graph);
    export::export(cli.format, &data, out)?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut stdout = io::stdout().lock();
    run(&cli, &mut stdout)
}
