use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shipcheck_tools::io::excel_write;
use shipcheck_tools::{Result, ToolError, compare, report};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;
    match cli.command {
        Command::Compare(args) => execute_compare(args),
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn execute_compare(args: CompareArgs) -> Result<()> {
    if !args.first.exists() {
        return Err(ToolError::MissingInput(args.first));
    }
    if !args.second.exists() {
        return Err(ToolError::MissingInput(args.second));
    }
    if args.titles_output.is_none() && args.counts_output.is_none() && args.summary.is_none() {
        return Err(ToolError::NoOutputRequested);
    }

    let comparison = compare::compare_files(&args.first, &args.second)?;

    if let Some(path) = &args.titles_output {
        excel_write::write_report(path, &report::title_report(&comparison))?;
        info!(output = %path.display(), "title comparison report written");
    }

    if let Some(path) = &args.counts_output {
        excel_write::write_report(path, &[report::count_report(&comparison)])?;
        info!(output = %path.display(), "count comparison report written");
    }

    if let Some(path) = &args.summary {
        fs::write(path, serde_json::to_string_pretty(&comparison)?)?;
        info!(output = %path.display(), "comparison summary written");
    }

    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Compare machinery maintenance job exports from two files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two exports and write the requested reports.
    Compare(CompareArgs),
}

#[derive(clap::Args)]
struct CompareArgs {
    /// First input file (CSV, TSV, or XLSX).
    #[arg(long)]
    first: PathBuf,

    /// Second input file (CSV, TSV, or XLSX).
    #[arg(long)]
    second: PathBuf,

    /// Destination for the job-title comparison workbook.
    #[arg(long)]
    titles_output: Option<PathBuf>,

    /// Destination for the machinery count comparison workbook.
    #[arg(long)]
    counts_output: Option<PathBuf>,

    /// Destination for a JSON dump of the full comparison.
    #[arg(long)]
    summary: Option<PathBuf>,
}
