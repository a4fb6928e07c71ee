//! Phrase counting over a whole text file.

use std::fs;
use std::path::Path;
use tracing::error;

use crate::analyzers::Analyzer;
use crate::analyzers::types::PhraseCountReport;
use crate::error::AnalyzeError;
use crate::parser::count_phrase;

/// Reads `path` and counts case-insensitive occurrences of `phrase`.
///
/// Bytes that are not valid UTF-8 are replaced before matching.
pub fn try_count_phrase_in_file(path: &Path, phrase: &str) -> Result<usize, AnalyzeError> {
    let bytes = fs::read(path).map_err(|source| AnalyzeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(count_phrase(&content, phrase))
}

/// Like [`try_count_phrase_in_file`], but logs failures and returns zero.
pub fn count_phrase_in_file(path: &Path, phrase: &str) -> usize {
    try_count_phrase_in_file(path, phrase).unwrap_or_else(|e| {
        error!(path = %path.display(), error = %e, "There was an error reading the text file");
        0
    })
}

/// Analyzer counting a phrase anywhere in a text file.
#[derive(Debug, Clone)]
pub struct TextPhrase {
    pub phrase: String,
}

impl Analyzer for TextPhrase {
    type Report = PhraseCountReport;

    fn name(&self) -> &'static str {
        "text"
    }

    fn analyze(&self, path: &Path) -> PhraseCountReport {
        PhraseCountReport {
            phrase: self.phrase.clone(),
            column: None,
            count: count_phrase_in_file(path, &self.phrase),
        }
    }
}
