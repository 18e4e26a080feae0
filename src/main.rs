mod config;
mod engine;
mod error;
mod gate;
mod outlier;
mod report;
mod trend;
mod window;

use crate::config::{Config, FileConfig, parse_period};
use crate::engine::Engine;
use crate::error::ERROR_EXIT_CODE;
use anyhow::{Context, Result};
use clap::Parser;
use std::{io, path::PathBuf};

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// Number of readings in a window.
    #[arg(allow_negative_numbers = true)]
    period: String,

    /// Minimum evolution difference counted as a trend switch.
    #[arg(long)]
    threshold: Option<f64>,

    /// Token ending the input stream.
    #[arg(long)]
    sentinel: Option<String>,

    /// Number of weirdest values to report.
    #[arg(long)]
    n_weird: Option<usize>,

    /// TOML file with default values for the options above.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = match CLI::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let code = if error.use_stderr() { ERROR_EXIT_CODE } else { 0 };
            error.print().ok();
            std::process::exit(code);
        }
    };

    if let Err(error) = run_cli(args) {
        log::error!("{error:#}");
        std::process::exit(ERROR_EXIT_CODE);
    }
}

fn run_cli(args: CLI) -> Result<()> {
    log::info!("{args:#?}");

    let cfg = build_config(args).context("failed to construct cfg")?;
    log::info!("{cfg:#?}");

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    let mut engine = Engine::new(cfg);
    engine
        .run(stdin, &mut stdout)
        .context("failed to process readings")?;

    Ok(())
}

fn build_config(args: CLI) -> Result<Config> {
    let period = parse_period(&args.period)?;
    let mut cfg = Config::new(period)?;

    if let Some(file) = &args.config {
        let file_config =
            FileConfig::from_file(file).with_context(|| format!("failed to load {file:?}"))?;
        cfg = cfg.merge(file_config)?;
    }

    let cli_config = FileConfig {
        threshold: args.threshold,
        sentinel: args.sentinel,
        n_weird: args.n_weird,
    };
    cfg.merge(cli_config)
}
