use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use datadex_cli::candidates::{CandidatesError, load_candidates};
use datadex_cli::pipeline::{PipelineError, PipelineOptions, run_pipeline};
use datadex_core::{AggregateOptions, PiiPolicy, RoleCandidates};
use datadex_ingest::{IngestError, load_workbook};

#[derive(Debug, Error)]
enum CliError {
    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),
    #[error("candidates error: {0}")]
    Candidates(#[from] CandidatesError),
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

#[derive(Parser, Debug)]
#[command(name = "datadex", version, about = "Generate entity docs from a data dictionary")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Data dictionary source: a CSV file, a directory of CSV sheets, or a
    /// JSON workbook.
    #[arg(long, value_name = "PATH")]
    dictionary: PathBuf,
    /// Output directory for generated entity pages.
    #[arg(long, default_value = "docs/entities")]
    out: PathBuf,
    /// Include dataset/schema values if present (NOT recommended for public
    /// repos).
    #[arg(long, default_value_t = false)]
    include_dataset: bool,
    /// Comma-separated keywords; columns containing these are dropped from
    /// output tables.
    #[arg(long, value_name = "LIST")]
    pii_keywords: Option<String>,
    /// TOML file overriding the column-name candidates per role.
    #[arg(long, value_name = "PATH")]
    candidates: Option<PathBuf>,
    /// Maximum field rows kept per entity.
    #[arg(long, default_value_t = 500)]
    field_row_cap: usize,
    /// Only log warnings and errors.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    init_logging(args.quiet);

    let candidates = match &args.candidates {
        Some(path) => load_candidates(path)?,
        None => RoleCandidates::default(),
    };
    let pii = match &args.pii_keywords {
        Some(list) => PiiPolicy::from_comma_list(list),
        None => PiiPolicy::default(),
    };

    tracing::info!(
        event = "run_started",
        dictionary = %args.dictionary.display(),
        out = %args.out.display()
    );

    let workbook = load_workbook(&args.dictionary)?;
    let options = PipelineOptions {
        out_dir: args.out,
        include_dataset_values: args.include_dataset,
        candidates,
        pii,
        aggregate: AggregateOptions {
            field_row_cap: args.field_row_cap,
        },
    };
    let summary = run_pipeline(&workbook, &options)?;

    tracing::info!(
        event = "run_finished",
        sheets_processed = summary.sheets_processed,
        sheets_skipped = summary.sheets_skipped,
        entities_generated = summary.entities_generated
    );

    Ok(())
}

fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
