//! One-aggregate analyzers over previously fetched files.
//!
//! Every analyzer reads a single local file, computes one statistic or tally,
//! and returns a report. Parse and I/O failures are logged and turned into
//! an empty or zero report, so [`Analyzer::analyze`] never fails.

pub mod numeric;
pub mod spreadsheet;
pub mod tally;
pub mod text;
pub mod types;
pub mod utility;

use serde::Serialize;
use std::fmt::Display;
use std::path::Path;

pub use numeric::NumericColumn;
pub use spreadsheet::ColumnPhrase;
pub use tally::FieldTally;
pub use text::TextPhrase;

/// Computes a report from one fetched file.
pub trait Analyzer {
    /// Rendered with `Display` into the report artifact.
    type Report: Display + Serialize;

    /// Format name used in log lines.
    fn name(&self) -> &'static str;

    fn analyze(&self, path: &Path) -> Self::Report;
}
