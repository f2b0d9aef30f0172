use clap::Parser;
use std::process;
use wind_profile_processor::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", anyhow::Error::new(error));
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Wind Profile - Wind Import and Heading Search");
    println!("=============================================");
    println!();
    println!("Import wind measurements from XML measurement files, CSV files and");
    println!("whitespace soundings, and search profiles for layers matching a heading.");
    println!();
    println!("USAGE:");
    println!("    wind-profile <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    import      Import a wind file and print or save normalized layers");
    println!("    search      Rank own and peer layers against a target heading");
    println!("    detect      Report the detected format of a wind file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Import a sounding recorded in feet and knots:");
    println!("    wind-profile import sonde.txt --altitude-unit feet --speed-unit knots");
    println!();
    println!("    # Save an import as a profile:");
    println!("    wind-profile import winds.xml --output profile.json");
    println!();
    println!("    # Find layers blowing towards 270 degrees, including a peer profile:");
    println!("    wind-profile search --target 270 --mode to --profile profile.json \\");
    println!("                        --peer anna:#ff0000:anna.json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    wind-profile <COMMAND> --help");
}
