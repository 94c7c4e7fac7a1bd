use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use qscore::config::Config;
use qscore::output::{self, OutputFormat};
use qscore::runner::{Action, Runner};

/// Q-Score CLI - Score AI models from performance telemetry and rank them
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML run file
    run_file: PathBuf,

    /// What to compute
    #[arg(short, long, value_enum, default_value = "compare")]
    action: Action,

    /// Model to score (repeatable). Defaults to the whole catalog.
    #[arg(short, long = "model")]
    models: Vec<String>,

    /// Output format: plain or json
    #[arg(short, long, default_value = "plain")]
    output: OutputFormat,

    /// Verbose output - log progress for each model
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config::from_file(&args.run_file)?;
    let runner = Runner::new(config)?;

    let report = runner.run(args.action, &args.models).await?;

    output::print_report(&report, runner.catalog(), args.output);

    Ok(())
}
