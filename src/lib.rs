pub mod args;
pub mod config;
pub mod errors;
pub mod formatter;
pub mod json;
pub mod pretty;
pub mod ranking;
pub mod report;
pub mod traits;

pub use formatter::{new_formatter, supported_formats, Format, Formatter};
pub use report::{Meta, Report, TypeStats};
pub use traits::{byte_size, ByteSize};

use config::Config;
use errors::InspectError;

/// Renders the configured report and prints it to stdout.
pub fn run(config: Config) -> Result<(), InspectError> {
    let formatter = config.format.formatter();
    let output = formatter.format(&config.report)?;
    println!("{}", output);
    Ok(())
}
