use crate::errors::InspectError;
use crate::formatter::Formatter;
use crate::report::Report;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter as IndentFormatter, Serializer};

const INDENT: &[u8] = b"   ";

/// Serializes the whole report as JSON indented by three spaces.
///
/// `Stats` keys are written in ascending order so repeated calls give identical output.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String, InspectError> {
        log::debug!("Rendering report {} as json", report.meta.id);

        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, IndentFormatter::with_indent(INDENT));
        report
            .serialize(&mut ser)
            .map_err(InspectError::Serialization)?;

        // serde_json only ever writes valid UTF-8
        String::from_utf8(buf).map_err(|e| {
            InspectError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }
}
