/// Provides functionality to format byte counts into short human-readable strings.
///
/// Units are binary (1024 bytes = 1 KB) and scale from bytes up to terabytes.
/// At most one decimal digit is kept, and it is dropped entirely when it is zero.
///
/// # Examples
///
/// ```
/// use snapshot_inspect::traits::ByteSize;
/// let size: u64 = 1024;
/// assert_eq!(size.format_size(), "1KB");
///
/// let large_size: u64 = 1024 * 1024 * 1024;
/// assert_eq!(large_size.format_size(), "1GB");
/// ```
pub trait ByteSize {
    /// Formats the number into a human-readable string with appropriate size units.
    ///
    /// The output will use one of the following units based on the size:
    /// - no unit for zero (`"0"`)
    /// - bytes (1B to 1023B)
    /// - kilobytes (1KB to 1024KB)
    /// - megabytes (1MB to 1024MB)
    /// - gigabytes (1GB to 1024GB)
    /// - terabytes (1TB and above)
    ///
    /// # Examples
    ///
    /// ```
    /// use snapshot_inspect::traits::ByteSize;
    ///
    /// assert_eq!(0_u64.format_size(), "0");
    /// assert_eq!(512_u64.format_size(), "512B");
    /// assert_eq!(1536_u64.format_size(), "1.5KB");
    /// assert_eq!((1024 * 1024_u64).format_size(), "1MB");
    /// ```
    fn format_size(&self) -> String;
}

impl ByteSize for u64 {
    fn format_size(&self) -> String {
        const B: u64 = 1;
        const KB: u64 = B * 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;
        const TB: u64 = GB * 1024;

        let (value, unit) = match *self {
            0 => return "0".to_string(),
            bytes if bytes >= TB => (bytes as f64 / TB as f64, "TB"),
            bytes if bytes >= GB => (bytes as f64 / GB as f64, "GB"),
            bytes if bytes >= MB => (bytes as f64 / MB as f64, "MB"),
            bytes if bytes >= KB => (bytes as f64 / KB as f64, "KB"),
            bytes => (bytes as f64, "B"),
        };

        let formatted = format!("{:.1}", value);
        let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
        format!("{}{}", trimmed, unit)
    }
}

/// Free-function form of [`ByteSize::format_size`].
///
/// ```
/// assert_eq!(snapshot_inspect::byte_size(2048), "2KB");
/// ```
pub fn byte_size(bytes: u64) -> String {
    bytes.format_size()
}
