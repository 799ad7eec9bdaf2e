//! Logger setup.
//!
//! The games own the terminal while they run, so log lines only make sense in
//! a file. Without `ARCADE_LOG_PATH` the logger writes to stderr at `warn`.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::config::ArcadeConfig;

pub fn init(config: &ArcadeConfig) -> Result<()> {
    let mut builder = Builder::new();

    match &config.log_filter {
        Some(filter) => {
            builder.parse_filters(filter);
        }
        None if config.log_path.is_some() => {
            builder.filter_level(LevelFilter::Info);
        }
        None => {
            builder.filter_level(LevelFilter::Warn);
        }
    }

    if let Some(path) = &config.log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("installing logger")?;
    Ok(())
}
