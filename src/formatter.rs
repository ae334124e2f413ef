use crate::errors::InspectError;
use crate::json::JsonFormatter;
use crate::pretty::PrettyFormatter;
use crate::report::Report;
use std::fmt;
use std::str::FromStr;

/// Renders a [`Report`] into a string.
///
/// Implementations hold no state, so one instance may be shared between threads
/// and called any number of times.
pub trait Formatter: Send + Sync {
    fn format(&self, report: &Report) -> Result<String, InspectError>;
}

/// The closed set of output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Aligned table for people.
    Pretty,
    /// Indented JSON for machines.
    Json,
}

impl Format {
    /// Every format, in the order they are presented to users.
    pub const ALL: [Format; 2] = [Format::Pretty, Format::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Pretty => "pretty",
            Format::Json => "json",
        }
    }

    /// Returns the renderer bound to this format.
    pub fn formatter(&self) -> Box<dyn Formatter> {
        match self {
            Format::Pretty => Box::new(PrettyFormatter),
            Format::Json => Box::new(JsonFormatter),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = InspectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| InspectError::UnsupportedFormat(s.to_string()))
    }
}

/// Lists the identifiers accepted by [`new_formatter`], table format first.
///
/// ```
/// assert_eq!(snapshot_inspect::supported_formats(), vec!["pretty", "json"]);
/// ```
pub fn supported_formats() -> Vec<&'static str> {
    Format::ALL.iter().map(Format::as_str).collect()
}

/// Selects the renderer for a format identifier.
///
/// # Errors
///
/// Returns [`InspectError::UnsupportedFormat`] naming `format` when it is not one of
/// [`supported_formats`].
///
/// ```
/// use snapshot_inspect::{new_formatter, errors::InspectError};
///
/// assert!(new_formatter("json").is_ok());
/// assert!(matches!(new_formatter("xml"), Err(InspectError::UnsupportedFormat(f)) if f == "xml"));
/// ```
pub fn new_formatter(format: &str) -> Result<Box<dyn Formatter>, InspectError> {
    let format: Format = format.parse()?;
    log::debug!("Selected {} formatter", format);
    Ok(format.formatter())
}
