//! Phrase counting over one column of a workbook's first sheet.

use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;
use tracing::{debug, error};

use crate::analyzers::Analyzer;
use crate::analyzers::types::PhraseCountReport;
use crate::error::AnalyzeError;
use crate::parser::{column_index, count_phrase};

/// Sums phrase occurrences across the text cells of absolute column `col`.
///
/// Numbers, booleans, dates, errors, and empty cells are skipped.
pub fn count_in_range(range: &Range<Data>, col: u32, phrase: &str) -> usize {
    let (Some((_, first_col)), Some((_, last_col))) = (range.start(), range.end()) else {
        return 0;
    };
    if col < first_col || col > last_col {
        return 0;
    }
    let offset = (col - first_col) as usize;

    range
        .rows()
        .filter_map(|row| row.get(offset))
        .filter_map(|cell| match cell {
            Data::String(text) => Some(count_phrase(text, phrase)),
            _ => None,
        })
        .sum()
}

/// Opens the workbook at `path` and counts `phrase` in `column` of its first
/// sheet.
pub fn try_count_phrase_in_column(
    path: &Path,
    column: &str,
    phrase: &str,
) -> Result<usize, AnalyzeError> {
    let col = column_index(column)?;
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(AnalyzeError::MissingSheet)??;
    debug!(
        rows = range.height(),
        columns = range.width(),
        "Worksheet loaded"
    );
    Ok(count_in_range(&range, col, phrase))
}

/// Like [`try_count_phrase_in_column`], but logs failures and returns zero.
pub fn count_phrase_in_column(path: &Path, column: &str, phrase: &str) -> usize {
    try_count_phrase_in_column(path, column, phrase).unwrap_or_else(|e| {
        error!(path = %path.display(), error = %e, "There was an error reading Excel file");
        0
    })
}

/// Analyzer counting a phrase in one spreadsheet column.
#[derive(Debug, Clone)]
pub struct ColumnPhrase {
    /// Column letter, e.g. `"C"`.
    pub column: String,
    pub phrase: String,
}

impl Analyzer for ColumnPhrase {
    type Report = PhraseCountReport;

    fn name(&self) -> &'static str {
        "Excel"
    }

    fn analyze(&self, path: &Path) -> PhraseCountReport {
        PhraseCountReport {
            phrase: self.phrase.clone(),
            column: Some(self.column.clone()),
            count: count_phrase_in_column(path, &self.column, &self.phrase),
        }
    }
}
