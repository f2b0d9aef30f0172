//! Detect command: report the format of a wind file

use crate::app::services::format_detector::detect_format;
use crate::app::services::wind_import::{FileRoute, route_file};
use crate::cli::args::DetectArgs;
use crate::{Error, Result};

pub fn run_detect(args: &DetectArgs) -> Result<()> {
    let route = route_file(&args.file);
    if route != FileRoute::WindImport {
        println!("{}: {:?}", args.file.display(), route);
        return Ok(());
    }

    let bytes = std::fs::read(&args.file)
        .map_err(|e| Error::io(format!("Failed to read file {}", args.file.display()), e))?;
    let format = detect_format(&String::from_utf8_lossy(&bytes));
    println!("{}: {}", args.file.display(), format);
    Ok(())
}
