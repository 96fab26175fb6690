//! rBabyLog library root.
//! Exposes the CLI parser, the run() entry point and the cleaning/analytics
//! modules used to turn baby CSV logs into bucketed sleep statistics.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use crate::core::calculator::buckets::TimeAggregator;
use crate::core::logic::Core;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, aggregator: TimeAggregator) -> AppResult<()> {
    let core = Core::new(cfg, aggregator);

    match &cli.command {
        Commands::Datasets => cli::commands::datasets::handle(cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, &core),
        Commands::Minutes { limit } => cli::commands::sleep::handle_minutes(&core, *limit),
        Commands::Nights => cli::commands::sleep::handle_nights(&core),
        Commands::Overlaps => cli::commands::sleep::handle_overlaps(&core),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, &core),
    }
}

/// Build the aggregator from `--birthday`, or the default reference date.
pub fn resolve_aggregator(birthday: Option<&str>) -> AppResult<TimeAggregator> {
    match birthday {
        None => Ok(TimeAggregator::default()),
        Some(s) => utils::date::parse_date(s)
            .map(TimeAggregator::new)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("RBABYLOG_LOG", "warn"))
        .try_init()
        .ok();

    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load the dataset document ONCE
    let config_path = cli.config.as_deref().unwrap_or(Config::DEFAULT_FILE);
    let mut cfg = Config::load(Path::new(config_path))?;

    // 3️⃣ command-line overrides
    if let Some(dir) = &cli.data_dir {
        cfg = cfg.with_data_dir(dir);
    }
    let aggregator = resolve_aggregator(cli.birthday.as_deref())?;

    dispatch(&cli, &cfg, aggregator)
}
