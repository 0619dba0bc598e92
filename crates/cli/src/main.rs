//! # forecast-cli
//!
//! Command-line interface for the forecast engine. Reads an input document
//! from a file or stdin and writes the JSON result to a file or stdout.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use forecast_facade::{ForecastConfig, ForecastEngine, LedgerConfig, Locale, Scenario};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "forecast-engine")]
#[command(about = "Statistical forecasting for daily series", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    io: IoArgs,

    #[command(flatten)]
    defaults: DefaultArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast an input document (the default command)
    Run,

    /// Forecast and project a what-if scenario with recommendations
    Scenario {
        /// Scenario name (optimistic, pessimistic)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List the built-in scenarios
    Scenarios,

    /// Aggregate ledger records into a daily input document
    Aggregate {
        /// Days of zero-filled history before the first record
        #[arg(long, default_value_t = LedgerConfig::default().lookback_days)]
        lookback_days: u32,
    },
}

#[derive(Args)]
struct IoArgs {
    /// Input file (stdin when omitted)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Args)]
struct DefaultArgs {
    /// Forecast horizon when the document omits one
    #[arg(long, env = "FORECAST_HORIZON", global = true)]
    horizon: Option<usize>,

    /// Seasonal period when the document omits one
    #[arg(long, env = "FORECAST_SEASONALITY", global = true)]
    seasonality: Option<usize>,

    /// Language for descriptions (tr, en)
    #[arg(long, env = "FORECAST_LOCALE", global = true, default_value = "tr")]
    locale: Locale,
}

impl DefaultArgs {
    fn engine(&self) -> Result<ForecastEngine> {
        let mut builder = ForecastConfig::builder().locale(self.locale);
        if let Some(horizon) = self.horizon {
            builder = builder.horizon(horizon);
        }
        if let Some(seasonality) = self.seasonality {
            builder = builder.seasonality(seasonality);
        }
        let config = builder.build().context("invalid forecast defaults")?;
        Ok(ForecastEngine::new(config)?)
    }
}

/// Read the whole input from a file or stdin.
fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    match path {
        Some(path) => {
            File::open(path)
                .with_context(|| format!("failed to open input {}", path.display()))?
                .read_to_end(&mut buffer)
                .with_context(|| format!("failed to read input {}", path.display()))?;
        }
        None => {
            io::stdin()
                .lock()
                .read_to_end(&mut buffer)
                .context("failed to read stdin")?;
        }
    }
    Ok(buffer)
}

/// Serialize `value` as JSON to a file or stdout.
fn write_output<T: Serialize>(value: &T, path: Option<&Path>, pretty: bool) -> Result<()> {
    let mut writer: Box<dyn Write> = match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("failed to create output {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)
    } else {
        serde_json::to_writer(&mut writer, value)
    }
    .context("failed to serialize output")?;
    writeln!(writer).context("failed to write output")?;
    writer.flush().context("failed to flush output")?;

    if let Some(path) = path {
        info!(path = %path.display(), "output written");
    }
    Ok(())
}

fn run_forecast(io: &IoArgs, engine: &ForecastEngine) -> Result<()> {
    let input = read_input(io.input.as_deref())?;
    let document = engine.run_bytes(&input);
    write_output(&document, io.output.as_deref(), io.pretty)
}

fn run_scenario(io: &IoArgs, engine: &ForecastEngine, name: Option<&str>) -> Result<()> {
    let input = read_input(io.input.as_deref())?;
    let document = engine.run_scenario(&input, name);
    write_output(&document, io.output.as_deref(), io.pretty)
}

fn run_scenarios(io: &IoArgs) -> Result<()> {
    write_output(&Scenario::builtin(), io.output.as_deref(), io.pretty)
}

fn run_aggregate(io: &IoArgs, lookback_days: u32) -> Result<()> {
    let input = read_input(io.input.as_deref())?;
    let ledger: serde_json::Value =
        serde_json::from_slice(&input).context("ledger input is not valid JSON")?;
    let document = forecast_facade::ledger_to_document(&ledger, &LedgerConfig { lookback_days });
    write_output(&document, io.output.as_deref(), io.pretty)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_forecast(&cli.io, &cli.defaults.engine()?),
        Commands::Scenario { name } => {
            run_scenario(&cli.io, &cli.defaults.engine()?, name.as_deref())
        }
        Commands::Scenarios => run_scenarios(&cli.io),
        Commands::Aggregate { lookback_days } => run_aggregate(&cli.io, lookback_days),
    }
}

fn main() {
    init_tracing();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
