// src/bin/cipher.rs
//! Line-oriented cipher front end — one JSON request in, one JSON response out

use anyhow::{Context, Result};
use classic_ciphers::config::{self, Config};
use classic_ciphers::run_batch;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Config picks the log filter, so its failure can only be logged once
    // the subscriber exists.
    let (config, config_error) = match config::try_load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .context("invalid logging filter in config")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Some(err) = config_error {
        let path = config::config_path().unwrap_or_default();
        warn!(path = %path.display(), error = %err, "unusable config, using defaults");
    }

    let input: Box<dyn BufRead> = match std::env::args_os().nth(1) {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open {}", path.to_string_lossy()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let summary = run_batch(input, io::stdout().lock()).context("failed to process requests")?;

    info!(ok = summary.ok, failed = summary.failed, "requests processed");
    Ok(())
}
