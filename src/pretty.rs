use crate::errors::InspectError;
use crate::formatter::Formatter;
use crate::ranking::RankedStats;
use crate::report::Report;
use crate::traits::ByteSize;
use std::io::Write;
use tabwriter::TabWriter;

const MIN_WIDTH: usize = 8;
const PADDING: usize = 6;
const RULE: &str = "----";

/// Renders the report as an aligned table.
///
/// The output starts with the snapshot metadata, followed by one row per record
/// type (largest cumulative size first) and a closing `Total` row holding the
/// report's offset.
///
/// ```text
///  ID           snap-1
///  Size         4096
///  ...
///
///  Type         Count      Size
///  ----         ----       ----
///  KVS          3          1KB
///  ----         ----       ----
///  Total                   4KB
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyFormatter;

impl Formatter for PrettyFormatter {
    /// Writing into an in-memory buffer cannot fail, so the error path is only
    /// reachable if the table writer itself reports an I/O error on flush.
    fn format(&self, report: &Report) -> Result<String, InspectError> {
        log::debug!(
            "Rendering report {} with {} record types as table",
            report.meta.id,
            report.stats.len()
        );

        let meta = &report.meta;
        let ranked = RankedStats::from_stats(&report.stats);
        let mut tw = TabWriter::new(Vec::new())
            .minwidth(MIN_WIDTH)
            .padding(PADDING);

        write!(tw, " ID\t{}", meta.id)?;
        write!(tw, "\n Size\t{}", meta.size)?;
        write!(tw, "\n Index\t{}", meta.index)?;
        write!(tw, "\n Term\t{}", meta.term)?;
        write!(tw, "\n Version\t{}", meta.version)?;
        writeln!(tw)?;
        writeln!(tw, "\n Type\tCount\tSize\t")?;
        write!(tw, " {RULE}\t{RULE}\t{RULE}\t")?;
        for (name, stat) in ranked.entries() {
            log::trace!("{} -> {} records, {} bytes", name, stat.count, stat.sum);
            write!(tw, "\n {}\t{}\t{}\t", name, stat.count, stat.sum.format_size())?;
        }
        write!(tw, "\n {RULE}\t{RULE}\t{RULE}\t")?;
        writeln!(tw, "\n Total\t\t{}\t", report.offset.format_size())?;

        tw.flush()?;
        let buf = tw
            .into_inner()
            .map_err(|e| std::io::Error::new(e.error().kind(), e.error().to_string()))?;
        let mut out = String::from_utf8_lossy(&buf).into_owned();
        // the newline only terminates the Total row so it is padded like the others
        out.truncate(out.trim_end_matches('\n').len());
        Ok(out)
    }
}
