//! Search command: rank own and peer layers against a target heading

use crate::app::models::PeerProfile;
use crate::app::services::wind_search::search;
use crate::cli::args::{OutputFormat, SearchArgs};
use crate::cli::commands::shared::load_layers;
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use tracing::warn;

pub fn run_search(args: &SearchArgs, config: Config) -> Result<()> {
    let mut config = args.settings.apply_to(config)?;
    if let Some(max_results) = args.max_results {
        config = config.with_max_results(max_results);
        config.validate()?;
    }

    let own_layers = match &args.profile {
        Some(path) => load_layers(path, &config)?,
        None => Vec::new(),
    };

    let peers = args
        .peers
        .iter()
        .map(|peer| {
            Ok(PeerProfile {
                id: peer.id.clone(),
                display_name: peer.id.clone(),
                color: peer.color.clone(),
                layers: load_layers(&peer.path, &config)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let results = search(
        args.target.as_str(),
        &own_layers,
        &peers,
        args.mode,
        &config.search,
    );
    if results.is_empty() {
        warn!("No matches for target '{}'", args.target);
    }

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&results).map_err(|e| {
                Error::configuration(format!("Failed to serialize results: {}", e))
            })?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            println!(
                "{}",
                format!(
                    "{:<10} {:>8} {:>5} {:>7} {:>6} {:>4} {:>7}",
                    "SOURCE", "ALT (m)", "DIR", "KM/H", "DIFF", "TURN", "SCORE"
                )
                .bright_white()
                .bold()
            );
            for result in &results {
                println!(
                    "{:<10} {:>8} {:>5} {:>7.1} {:>6.0} {:>4} {:>7.1}",
                    result.source_id,
                    result.layer.altitude,
                    result.layer.direction,
                    result.layer.speed,
                    result.direction_diff,
                    result.turn_direction.to_string(),
                    result.score
                );
            }
        }
    }

    Ok(())
}
