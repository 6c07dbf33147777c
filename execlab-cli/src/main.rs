//! execlab CLI — backtest, VaR, and Monte Carlo commands.
//!
//! Commands:
//! - `backtest` — classify predictions, run the state machine, report trades
//! - `var` — historical Value-at-Risk of a JSON return series
//! - `simulate` — Monte Carlo forward equity paths from a TOML config

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use execlab_core::config::{BacktestConfig, MonteCarloConfig};
use execlab_core::risk::{historical_var, monte_carlo};
use execlab_core::strategy::{classify, run_with_sizing, BarState};

#[derive(Parser)]
#[command(name = "execlab", about = "execlab CLI — trade execution and risk simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a backtest from a TOML config (prices, predictions, risk limits).
    Backtest {
        /// Path to a TOML config file.
        #[arg(long)]
        config: PathBuf,

        /// Include the full per-bar state sequence in the output.
        #[arg(long, default_value_t = false)]
        full: bool,
    },
    /// Historical Value-at-Risk of a return series.
    Var {
        /// Path to a JSON array of returns.
        #[arg(long)]
        returns: PathBuf,

        /// Confidence level in (0, 1). Defaults to 0.05.
        #[arg(long, default_value_t = 0.05)]
        confidence: f64,
    },
    /// Monte Carlo simulation of forward equity paths.
    Simulate {
        /// Path to a TOML config file with `returns` and a `[monte_carlo]` table.
        #[arg(long)]
        config: PathBuf,

        /// Write the full simulation matrix to this JSON file.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
struct BacktestSummary {
    bars: usize,
    entries: usize,
    exits: usize,
    final_position: execlab_core::domain::PositionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    states: Option<Vec<BarState>>,
}

#[derive(Debug, Deserialize)]
struct SimulateConfig {
    returns: Vec<f64>,
    #[serde(default)]
    monte_carlo: MonteCarloConfig,
}

#[derive(Debug, Serialize)]
struct SimulateSummary {
    n_simulations: usize,
    n_days: usize,
    seed: u64,
    terminal_mean: f64,
    terminal_min: f64,
    terminal_max: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Backtest { config, full } => cmd_backtest(&config, full),
        Commands::Var {
            returns,
            confidence,
        } => cmd_var(&returns, confidence),
        Commands::Simulate { config, out } => cmd_simulate(&config, out.as_deref()),
    }
}

fn cmd_backtest(path: &std::path::Path, full: bool) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = BacktestConfig::from_toml_str(&text).context("invalid backtest config")?;

    let signals = classify(&config.predictions, config.threshold);
    let bars = run_with_sizing(&config.prices, &signals, &config.risk, config.balance)
        .context("backtest failed")?;

    let summary = BacktestSummary {
        bars: bars.len(),
        entries: bars.iter().filter(|b| b.entered_qty.is_some()).count(),
        exits: bars.iter().filter(|b| b.exit.is_some()).count(),
        final_position: bars
            .last()
            .map(|b| b.position)
            .unwrap_or(execlab_core::domain::PositionState::Flat),
        states: full.then_some(bars),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn cmd_var(path: &std::path::Path, confidence: f64) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read returns {}", path.display()))?;
    let returns: Vec<f64> =
        serde_json::from_str(&text).context("returns must be a JSON array of numbers")?;

    let var = historical_var(&returns, confidence)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "confidence": confidence,
            "observations": returns.len(),
            "var": var,
        }))?
    );
    Ok(())
}

fn cmd_simulate(path: &std::path::Path, out: Option<&std::path::Path>) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: SimulateConfig = toml::from_str(&text).context("invalid simulate config")?;

    let matrix = monte_carlo(&config.returns, &config.monte_carlo)?;
    let terminal = matrix.terminal_values();

    let summary = SimulateSummary {
        n_simulations: matrix.n_simulations(),
        n_days: matrix.n_days(),
        seed: config.monte_carlo.seed,
        terminal_mean: terminal.iter().sum::<f64>() / terminal.len() as f64,
        terminal_min: terminal.iter().copied().fold(f64::INFINITY, f64::min),
        terminal_max: terminal.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if let Some(out_path) = out {
        fs::write(out_path, serde_json::to_string(&matrix)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }
    Ok(())
}
