//! Command implementations for the wind profile CLI
//!
//! Each command lives in its own module:
//! - `import`: Parse, normalize and print or save a wind file
//! - `search`: Rank own and peer layers against a target heading
//! - `detect`: Report the detected format of a file

pub mod detect;
pub mod import;
pub mod search;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Sets up logging, loads the configuration and dispatches to the
/// subcommand handler.
pub fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args)?;
    let config = args.load_config()?;

    match args.command {
        Some(Commands::Import(import_args)) => import::run_import(&import_args, config),
        Some(Commands::Search(search_args)) => search::run_search(&search_args, config),
        Some(Commands::Detect(detect_args)) => detect::run_detect(&detect_args),
        None => Ok(()),
    }
}
