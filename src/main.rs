//! Woopen Gamers - static gaming platform dashboard
//!
//! Renders a navigation sidebar, game previews, a search panel and a column of
//! profile and community widgets. All content is built in; the only state
//! that changes is the light/dark theme.

mod config;
mod dashboard;
mod error;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Woopen Gamers dashboard
#[derive(Parser, Debug)]
#[command(name = "woopen-gamers")]
#[command(about = "A static gaming platform dashboard")]
struct Args {
    /// Load configuration from this file instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Write the default configuration and exit; uses the --config path when
    /// given, otherwise the default location. Never overwrites a file.
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(level) = &args.log_level {
        config::parse_level(level)?;
    }

    if args.init_config {
        init_logging(args.log_level.as_deref().unwrap_or("info"))?;
        init_config_file(args.config.as_deref())?;
        return Ok(());
    }

    let (mut config, fallback) = load_or_default_config(args.config.as_deref())?;
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }

    init_logging(&config.logging.level)?;
    if let Some(reason) = fallback {
        warn!("Using default configuration: {}", reason);
    }

    if args.print_config {
        print!("{}", render_config(&config)?);
        return Ok(());
    }

    info!("Woopen Gamers starting...");

    if let Err(e) = dashboard::run_dashboard(&config) {
        error!("Dashboard error: {}", e);
    }

    info!("Woopen Gamers shutdown complete");

    Ok(())
}

/// Install the tracing subscriber on stderr. `RUST_LOG` wins over `level`.
fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(level.trim().to_ascii_lowercase()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?;

    Ok(())
}

/// Effective configuration as printed by `--print-config`
fn render_config(config: &AppConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

/// Load configuration from an explicit path, the default location, or defaults.
///
/// An explicit path must load. A missing default file silently yields the
/// defaults; a broken one yields the defaults plus the reason, to be logged
/// once logging is up.
fn load_or_default_config(explicit: Option<&Path>) -> Result<(AppConfig, Option<String>)> {
    if let Some(path) = explicit {
        let config = config::load_config(path)
            .with_context(|| format!("loading configuration from {:?}", path))?;
        return Ok((config, None));
    }

    let path = match config::default_config_path() {
        Ok(path) => path,
        Err(e) => return Ok((AppConfig::default(), Some(e.to_string()))),
    };

    if !path.exists() {
        return Ok((AppConfig::default(), None));
    }

    match config::load_config(&path) {
        Ok(config) => Ok((config, None)),
        Err(e) => Ok((AppConfig::default(), Some(e.to_string()))),
    }
}

/// Write the default configuration to `target` (or the default location)
/// unless a file already exists there
fn init_config_file(target: Option<&Path>) -> Result<PathBuf> {
    let path = match target {
        Some(path) => path.to_path_buf(),
        None => config::default_config_path()?,
    };
    if path.exists() {
        info!("Configuration already exists at {:?}", path);
        return Ok(path);
    }

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating config directory {:?}", dir))?;
    }
    config::save_config(&AppConfig::default(), &path)?;
    info!("Wrote default configuration to {:?}", path);
    Ok(path)
}
