//! Shared components for CLI commands

use crate::app::models::{ImportResult, WindLayer};
use crate::app::services::profile_store::load_profile;
use crate::app::services::wind_import::{FileRoute, import_file, route_file};
use crate::cli::args::Args;
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use std::path::Path;
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wind_profile_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load layers from a saved profile or import them from a wind file
pub fn load_layers(path: &Path, config: &Config) -> Result<Vec<WindLayer>> {
    match route_file(path) {
        FileRoute::SavedProfile => load_profile(path),
        FileRoute::Trajectory => Err(Error::configuration(format!(
            "{} is a trajectory file and holds no wind profile",
            path.display()
        ))),
        FileRoute::WindImport => {
            let outcome = import_file(path, &config.import, config.source)?;
            print_diagnostics(&outcome.result);
            if !outcome.success() {
                return Err(Error::configuration(format!(
                    "Could not import {}: {}",
                    path.display(),
                    outcome.result.errors.join("; ")
                )));
            }
            if outcome.layers.is_empty() {
                return Err(Error::configuration(format!(
                    "No usable wind layers in {}",
                    path.display()
                )));
            }
            info!("Loaded {} layers from {}", outcome.layers.len(), path.display());
            Ok(outcome.layers)
        }
    }
}

/// Print import errors and warnings to stderr
pub fn print_diagnostics(result: &ImportResult) {
    for error in &result.errors {
        eprintln!("{} {}", "error:".bright_red().bold(), error);
    }
    for warning in &result.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
}

/// Print layers as a table
pub fn print_layer_table(layers: &[WindLayer]) {
    println!(
        "{}",
        format!(
            "{:>8}  {:>5}  {:>7}  {}",
            "ALT (m)", "DIR", "KM/H", "SOURCE"
        )
        .bright_white()
        .bold()
    );
    for layer in layers {
        println!(
            "{:>8}  {:>5}  {:>7.1}  {}",
            layer.altitude, layer.direction, layer.speed, layer.source
        );
    }
}
