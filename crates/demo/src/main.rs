//! Demo driver: builds a small tree and ticks it once per configured delta.
mod config;
mod tree;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use fluent_behavior_tree::{BuildError, TickError};

use config::DemoConfig;
use tree::ActionLog;

/// Tick a demo behavior tree
#[derive(Parser)]
#[command(name = "fbt-demo")]
#[command(about = "Builds the demo behavior tree and ticks it", long_about = None)]
#[command(version)]
struct Cli {
    /// Time delta for one tick (repeatable, overrides FBT_TICKS)
    #[arg(short, long = "tick", value_name = "DELTA")]
    ticks: Vec<f32>,

    /// Branch threshold compared against the delta (overrides FBT_THRESHOLD)
    #[arg(long)]
    threshold: Option<f32>,

    /// Do not print a line for every action
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn apply(self, mut config: DemoConfig) -> DemoConfig {
        if !self.ticks.is_empty() {
            config.ticks = self.ticks;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        config.quiet |= self.quiet;
        config
    }
}

fn main() -> ExitCode {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().apply(DemoConfig::from_env());

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_structural(&err) => {
            eprintln!("{err:#}");
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("FATAL ERROR: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(config: &DemoConfig) -> Result<()> {
    let log = Arc::new(ActionLog::default());
    let tree = tree::start_up(config, &log).context("failed to build demo tree")?;
    tracing::info!(root = tree.name(), nodes = tree.node_count(), "tree ready");

    for (step, delta) in config.ticks.iter().copied().enumerate() {
        let status = tree
            .tick(delta)
            .with_context(|| format!("tick {step} (delta {delta}) failed"))?;
        tracing::info!(step, delta, %status, "ticked");
    }

    Ok(())
}

/// Malformed trees, as opposed to failures inside leaf functions.
fn is_structural(err: &anyhow::Error) -> bool {
    err.downcast_ref::<BuildError>().is_some()
        || matches!(
            err.downcast_ref::<TickError>(),
            Some(TickError::MissingChild { .. })
        )
}
