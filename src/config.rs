use crate::args::Args;
use crate::errors::InspectError;
use crate::formatter::Format;
use crate::report::Report;
use std::fs::File;
use std::io::{self, BufReader, Read};

/// Configuration structure containing runtime settings.
///
/// # Fields
///
/// * `format` - Output format the report is rendered in
/// * `report` - The decoded report to render
/// * `verbose` - Bool to determine if debug logging was requested
///
#[derive(Debug, Clone)]
pub struct Config {
    pub format: Format,
    pub report: Report,
    pub verbose: bool,
}

impl Config {
    /// Builds a new Config instance from provided command line arguments.
    ///
    /// The format is resolved first so an unsupported identifier is reported
    /// before any input is read. The report is then decoded from the input file
    /// if one was given, otherwise from stdin.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The format is not one of [`crate::supported_formats`]
    /// * The input file cannot be opened or read
    /// * The input is not a JSON encoded report
    ///
    pub fn build(args: &Args) -> Result<Config, InspectError> {
        let format: Format = args.format.parse()?;

        let report = match &args.input {
            Some(path) => {
                log::debug!("Reading report from {}", path.display());
                load_report(File::open(path)?)?
            }
            None => {
                log::debug!("Reading report from stdin");
                load_report(io::stdin().lock())?
            }
        };

        Ok(Config {
            format,
            report,
            verbose: args.verbose,
        })
    }
}

fn load_report<R: Read>(reader: R) -> Result<Report, InspectError> {
    serde_json::from_reader(BufReader::new(reader)).map_err(|source| InspectError::Decode { source })
}
