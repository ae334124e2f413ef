use thiserror::Error;

/// Error type representing the failures that can occur while selecting a formatter,
/// rendering a report, or loading one from the command line.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The requested output format is not one of [`crate::supported_formats`].
    ///
    /// # Examples
    /// ```
    /// use snapshot_inspect::errors::InspectError;
    /// let err = InspectError::UnsupportedFormat("xml".to_string());
    /// assert_eq!(format!("{}", err), "Unknown format: xml");
    /// ```
    #[error("Unknown format: {0}")]
    UnsupportedFormat(String),

    /// The structured encoder rejected a value in the report.
    #[error("Failed to marshal snapshot report: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Represents underlying I/O errors, such as a failed flush of the
    /// table writer or an unreadable input file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input handed to the command line could not be decoded into a report.
    #[error("Failed to decode snapshot report: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}
