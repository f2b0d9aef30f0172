//! Import command: parse, normalize and print or save a wind file

use crate::app::services::profile_store::{profile_to_json, save_profile};
use crate::cli::args::{ImportArgs, OutputFormat};
use crate::cli::commands::shared::{load_layers, print_layer_table};
use crate::config::Config;
use crate::Result;
use colored::*;
use tracing::info;

pub fn run_import(args: &ImportArgs, config: Config) -> Result<()> {
    let config = args.settings.apply_to(config)?;
    let layers = load_layers(&args.file, &config)?;

    if let Some(output) = &args.output {
        save_profile(output, &layers)?;
        info!("Saved {} layers to {}", layers.len(), output.display());
    }

    match args.format {
        OutputFormat::Json => println!("{}", profile_to_json(&layers)?),
        OutputFormat::Table => {
            println!(
                "{} {} layers from {}",
                "Imported".bright_green().bold(),
                layers.len().to_string().bright_white().bold(),
                args.file.display()
            );
            print_layer_table(&layers);
        }
    }

    Ok(())
}
