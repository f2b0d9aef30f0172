//! Command-line argument definitions for the wind profile processor
//!
//! Defines the CLI interface using the clap derive API. Import settings given
//! on the command line override the configuration file; settings declared in
//! an imported file's header override both.

use crate::app::models::{
    AltitudeReference, AltitudeUnit, DirectionMode, DirectionReference, ImportSettings, SpeedUnit,
    WindSource,
};
use crate::config::Config;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the wind profile processor
#[derive(Debug, Clone, Parser)]
#[command(
    name = "wind-profile",
    version,
    about = "Import wind profiles and search them for layers matching a heading",
    long_about = "Imports wind measurements and forecasts from XML measurement files, CSV files \
                  and whitespace soundings, normalizes them to meters MSL, km/h and degrees true, \
                  and ranks layers from your own and shared profiles against a target heading."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase logging verbosity
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Configuration file with default import settings and search options
    #[arg(long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Import a wind file and print or save the normalized layers
    Import(ImportArgs),
    /// Rank layers from own and peer profiles against a target heading
    Search(SearchArgs),
    /// Report the detected format of a wind file
    Detect(DetectArgs),
}

/// Unit and reference overrides shared by commands that import files
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct ImportSettingsArgs {
    /// Altitude unit (meters, feet)
    #[arg(long = "altitude-unit", value_name = "UNIT")]
    pub altitude_unit: Option<AltitudeUnit>,

    /// Speed unit (kmh, ms, knots)
    #[arg(long = "speed-unit", value_name = "UNIT")]
    pub speed_unit: Option<SpeedUnit>,

    /// Direction convention (from, to)
    #[arg(long = "direction-mode", value_name = "MODE")]
    pub direction_mode: Option<DirectionMode>,

    /// Direction reference (true, magnetic)
    #[arg(long = "direction-reference", value_name = "REF")]
    pub direction_reference: Option<DirectionReference>,

    /// Altitude reference (msl, agl)
    #[arg(long = "altitude-reference", value_name = "REF")]
    pub altitude_reference: Option<AltitudeReference>,

    /// Launch elevation in meters for AGL altitudes
    #[arg(long = "launch-elevation", value_name = "METERS", allow_hyphen_values = true)]
    pub launch_elevation: Option<f64>,

    /// Magnetic declination in degrees (east positive)
    #[arg(long = "declination", value_name = "DEGREES", allow_hyphen_values = true)]
    pub magnetic_declination: Option<f64>,

    /// Source tag for imported layers
    #[arg(long = "source", value_name = "SOURCE")]
    pub source: Option<WindSource>,
}

impl ImportSettingsArgs {
    /// Apply command line overrides on top of a configuration
    pub fn apply_to(&self, config: Config) -> Result<Config> {
        let base = config.import;
        let import = ImportSettings {
            altitude_unit: self.altitude_unit.unwrap_or(base.altitude_unit),
            speed_unit: self.speed_unit.unwrap_or(base.speed_unit),
            direction_mode: self.direction_mode.unwrap_or(base.direction_mode),
            direction_reference: self.direction_reference.unwrap_or(base.direction_reference),
            altitude_reference: self.altitude_reference.unwrap_or(base.altitude_reference),
            launch_elevation: self.launch_elevation.unwrap_or(base.launch_elevation),
            magnetic_declination: self
                .magnetic_declination
                .unwrap_or(base.magnetic_declination),
        };
        let source = self.source.unwrap_or(config.source);

        let config = config.with_import_settings(import).with_source(source);
        config.validate()?;
        Ok(config)
    }
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Wind file to import
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub settings: ImportSettingsArgs,

    /// Save the normalized layers as a profile file
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format for printed results
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the search command
#[derive(Debug, Clone, Parser)]
pub struct SearchArgs {
    /// Target heading in degrees [0, 360]
    #[arg(short = 't', long = "target", value_name = "DEGREES", allow_hyphen_values = true)]
    pub target: String,

    /// Own wind profile (saved profile or any wind file)
    #[arg(short = 'p', long = "profile", value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Peer profile as ID:COLOR:FILE, may be repeated
    #[arg(long = "peer", value_name = "ID:COLOR:FILE")]
    pub peers: Vec<PeerArg>,

    /// Direction convention used for comparison
    #[arg(long = "mode", value_name = "MODE", default_value = "from")]
    pub mode: DirectionMode,

    /// Number of matches to show
    #[arg(short = 'n', long = "max-results", value_name = "N")]
    pub max_results: Option<usize>,

    #[command(flatten)]
    pub settings: ImportSettingsArgs,

    /// Output format for printed results
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the detect command
#[derive(Debug, Clone, Parser)]
pub struct DetectArgs {
    /// Wind file to classify
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Peer profile reference given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct PeerArg {
    pub id: String,
    pub color: String,
    pub path: PathBuf,
}

impl FromStr for PeerArg {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(id), Some(color), Some(path))
                if !id.trim().is_empty() && !path.trim().is_empty() =>
            {
                Ok(PeerArg {
                    id: id.trim().to_string(),
                    color: color.trim().to_string(),
                    path: PathBuf::from(path.trim()),
                })
            }
            _ => Err(Error::invalid_setting("peer (expected ID:COLOR:FILE)", s)),
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON
    Json,
}

impl Args {
    /// Get the log level from verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Load the configuration file, or defaults when none was given
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::from_file(path),
            None => Ok(Config::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_import_command() {
        let args = Args::try_parse_from([
            "wind-profile",
            "import",
            "sonde.txt",
            "--altitude-unit",
            "feet",
            "--speed-unit",
            "kts",
            "--declination",
            "-4.5",
            "--format",
            "json",
        ])
        .unwrap();

        match args.command {
            Some(Commands::Import(import)) => {
                assert_eq!(import.file, PathBuf::from("sonde.txt"));
                assert_eq!(import.settings.altitude_unit, Some(AltitudeUnit::Feet));
                assert_eq!(import.settings.speed_unit, Some(SpeedUnit::Knots));
                assert_eq!(import.settings.magnetic_declination, Some(-4.5));
                assert_eq!(import.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_search_command() {
        let args = Args::try_parse_from([
            "wind-profile",
            "search",
            "--target",
            "270",
            "--profile",
            "own.json",
            "--peer",
            "anna:#ff0000:anna.json",
            "--peer",
            "ben:#00ff00:ben.csv",
            "--mode",
            "to",
        ])
        .unwrap();

        match args.command {
            Some(Commands::Search(search)) => {
                assert_eq!(search.target, "270");
                assert_eq!(search.peers.len(), 2);
                assert_eq!(search.peers[0].id, "anna");
                assert_eq!(search.peers[0].color, "#ff0000");
                assert_eq!(search.peers[1].path, PathBuf::from("ben.csv"));
                assert_eq!(search.mode, DirectionMode::To);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_setting_rejected() {
        let result = Args::try_parse_from([
            "wind-profile",
            "import",
            "file.csv",
            "--speed-unit",
            "furlongs",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_peer_arg_parsing() {
        let peer: PeerArg = "id:#123456:/tmp/a:b.json".parse().unwrap();
        assert_eq!(peer.path, PathBuf::from("/tmp/a:b.json"));
        assert!("only-id".parse::<PeerArg>().is_err());
        assert!(":#fff:file".parse::<PeerArg>().is_err());
    }

    #[test]
    fn test_settings_override_config() {
        let overrides = ImportSettingsArgs {
            altitude_reference: Some(AltitudeReference::Agl),
            launch_elevation: Some(850.0),
            source: Some(WindSource::Pibal),
            ..Default::default()
        };
        let config = overrides
            .apply_to(Config::default().with_magnetic_declination(2.0))
            .unwrap();

        assert_eq!(config.import.altitude_reference, AltitudeReference::Agl);
        assert_eq!(config.import.launch_elevation, 850.0);
        assert_eq!(config.import.magnetic_declination, 2.0);
        assert_eq!(config.source, WindSource::Pibal);
    }

    #[test]
    fn test_log_levels() {
        let args = Args::try_parse_from(["wind-profile", "-vv", "detect", "x"]).unwrap();
        assert_eq!(args.get_log_level(), "debug");
        let args = Args::try_parse_from(["wind-profile", "detect", "x", "-q"]).unwrap();
        assert_eq!(args.get_log_level(), "error");
    }
}
