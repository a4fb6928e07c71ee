//! Summary statistics over one numeric column of a CSV file.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{error, warn};

use crate::analyzers::Analyzer;
use crate::analyzers::types::ColumnStatsReport;
use crate::error::AnalyzeError;
use crate::parser::parse_number;
use crate::stats::ColumnStats;

/// Reads every value of `column` from header-keyed CSV rows.
///
/// When the header repeats `column`, the last occurrence wins.
///
/// Rows whose value does not parse as a number, rows too short to have the
/// column, and malformed records are skipped with a warning.
///
/// # Errors
///
/// Fails when the header cannot be read or does not contain `column`.
pub fn read_column_values<R: Read>(reader: R, column: &str) -> Result<Vec<f64>, AnalyzeError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let idx = rdr
        .headers()?
        .iter()
        .enumerate()
        .filter(|(_, h)| *h == column)
        .last()
        .map(|(i, _)| i)
        .ok_or_else(|| AnalyzeError::MissingColumn(column.to_string()))?;

    let mut values = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 1;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(row, error = %e, "Skipping malformed row");
                continue;
            }
        };

        match record.get(idx) {
            Some(raw) => match parse_number(raw) {
                Ok(value) => values.push(value),
                Err(e) => warn!(row, value = raw, error = %e, "Skipping invalid row"),
            },
            None => warn!(row, column, "Skipping row with no value in column"),
        }
    }

    Ok(values)
}

/// Opens `path` and computes [`ColumnStats`] for `column`.
pub fn try_column_stats(path: &Path, column: &str) -> Result<ColumnStats, AnalyzeError> {
    let file = File::open(path).map_err(|source| AnalyzeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let values = read_column_values(file, column)?;
    Ok(ColumnStats::from_values(&values))
}

/// Like [`try_column_stats`], but logs failures and returns zeroed stats.
pub fn column_stats(path: &Path, column: &str) -> ColumnStats {
    match try_column_stats(path, column) {
        Ok(stats) => {
            if stats.is_empty() {
                warn!(path = %path.display(), column, "No numeric values found; statistics are zero");
            }
            stats
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "There was an error processing CSV file");
            ColumnStats::default()
        }
    }
}

/// Analyzer for one named numeric column.
#[derive(Debug, Clone)]
pub struct NumericColumn {
    pub column: String,
    /// Report heading prefix, e.g. `"Pokémon Speed"`.
    pub label: String,
}

impl Analyzer for NumericColumn {
    type Report = ColumnStatsReport;

    fn name(&self) -> &'static str {
        "CSV"
    }

    fn analyze(&self, path: &Path) -> ColumnStatsReport {
        ColumnStatsReport {
            label: self.label.clone(),
            stats: column_stats(path, &self.column),
        }
    }
}
