//! chainfetch CLI
//!
//! Runs the retrieval strategies against simulated, unreliable producers.

#![allow(clippy::print_stdout)]

mod driver;
mod output;
mod summary;

use std::path::PathBuf;

use application::StrategyKind;
use clap::{Parser, Subcommand};
use domain::ResourceKind;
use infrastructure::{AppConfig, init_telemetry};
use serde::Serialize;

use crate::driver::{Driver, DriverOptions};
use crate::summary::RunSummary;

/// chainfetch CLI
#[derive(Parser)]
#[command(name = "chainfetch-cli")]
#[command(author, version, about = "Chained retrieval under simulated failures", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./chainfetch.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible random failures
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Probability that any single fetch fails (0.0 - 1.0)
    #[arg(long, global = true)]
    failure_rate: Option<f64>,

    /// Fail every fetch of this resource (repeatable); disables random failures
    #[arg(long = "fail", value_name = "RESOURCE", global = true)]
    fail: Vec<ResourceKind>,

    /// Skip simulated latency
    #[arg(long, global = true)]
    no_latency: bool,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Include each run's fetch events
    #[arg(long, global = true)]
    events: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sequential, then parallel, then resilient
    Demo,

    /// Fail-fast dependent chain
    Sequential,

    /// All-or-nothing fan-out with fixed ids
    Parallel,

    /// Best-effort chain that degrades per stage
    Resilient,

    /// Print the effective configuration as TOML
    Config,
}

/// What a subcommand asks the binary to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    PrintConfig,
    Demo,
    Run(StrategyKind),
}

impl Commands {
    const fn action(&self) -> Action {
        match self {
            Self::Demo => Action::Demo,
            Self::Sequential => Action::Run(StrategyKind::Sequential),
            Self::Parallel => Action::Run(StrategyKind::Parallel),
            Self::Resilient => Action::Run(StrategyKind::Resilient),
            Self::Config => Action::PrintConfig,
        }
    }
}

impl Cli {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(seed) = self.seed {
            config.simulation.seed = Some(seed);
        }
        if let Some(rate) = self.failure_rate {
            config.simulation.failure_rate = rate;
        }
        if self.verbose > 0 {
            config.telemetry.log_filter = log_filter_from_verbosity(self.verbose).to_string();
        }
    }

    fn driver_options(&self) -> DriverOptions {
        DriverOptions {
            fail: self.fail.clone(),
            no_latency: self.no_latency,
        }
    }
}

const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    runs: &'a [RunSummary],
    stats: infrastructure::ChaosStats,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    init_telemetry(&config.telemetry)?;

    let single = match cli.command.action() {
        Action::PrintConfig => {
            print!("{}", toml::to_string_pretty(&config)?);
            return Ok(());
        },
        Action::Demo => None,
        Action::Run(kind) => Some(kind),
    };

    let driver = Driver::from_config(&config, &cli.driver_options())?;
    let mut summaries = match single {
        Some(kind) => vec![driver.run(kind).await],
        None => driver.demo().await,
    };
    if !cli.events {
        summaries = summaries
            .into_iter()
            .map(RunSummary::without_events)
            .collect();
    }

    if cli.json {
        let doc = JsonOutput {
            runs: &summaries,
            stats: driver.stats(),
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        for summary in &summaries {
            println!("{}", output::render_summary(summary));
        }
        println!("{}", output::render_stats(&driver.stats()));
    }

    Ok(())
}
