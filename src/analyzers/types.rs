//! Report types produced by the analyzers.
//!
//! Each implements [`Display`](std::fmt::Display) with the exact text written
//! to the report artifact, one labeled value per line.

use serde::Serialize;
use std::fmt;

use crate::stats::{CategoryTally, ColumnStats};

/// Min/max/mean/stdev report for one numeric CSV column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnStatsReport {
    /// Heading prefix, e.g. `"Pokémon Speed"`.
    pub label: String,
    pub stats: ColumnStats,
}

impl fmt::Display for ColumnStatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Statistics:", self.label)?;
        writeln!(f, "Minimum: {:.2}", self.stats.min)?;
        writeln!(f, "Maximum: {:.2}", self.stats.max)?;
        writeln!(f, "Mean: {:.2}", self.stats.mean)?;
        writeln!(f, "Standard Deviation: {:.2}", self.stats.stdev)
    }
}

/// Occurrence count of a phrase, optionally scoped to a spreadsheet column.
#[derive(Debug, Clone, Serialize)]
pub struct PhraseCountReport {
    pub phrase: String,
    pub column: Option<String>,
    pub count: usize,
}

impl fmt::Display for PhraseCountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.column {
            Some(column) => writeln!(
                f,
                "Occurrences of '{}' in column {}: {}",
                self.phrase, column, self.count
            ),
            None => writeln!(f, "Occurrences of '{}': {}", self.phrase, self.count),
        }
    }
}

/// Per-category counts under a heading such as `"People By Gender"`.
#[derive(Debug, Clone, Serialize)]
pub struct TallyReport {
    pub heading: String,
    pub tally: CategoryTally,
}

impl fmt::Display for TallyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.heading)?;
        for (category, count) in self.tally.iter() {
            writeln!(f, "{category}: {count}")?;
        }
        Ok(())
    }
}
