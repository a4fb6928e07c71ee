//! Category counts over a list of JSON records.

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, error, warn};

use crate::analyzers::Analyzer;
use crate::analyzers::types::TallyReport;
use crate::error::AnalyzeError;
use crate::stats::CategoryTally;

/// Category used for records that lack the field or hold `null` in it.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

fn category_of(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => UNKNOWN_CATEGORY.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Tallies `field` across the records found under `list_key`.
///
/// A missing `list_key` (or a document that is not an object) yields an
/// empty tally. Records that are not objects are skipped with a warning.
pub fn tally_records(
    doc: &Value,
    list_key: &str,
    field: &str,
) -> Result<CategoryTally, AnalyzeError> {
    let mut tally = CategoryTally::new();

    let records = match doc.get(list_key) {
        None => {
            debug!(list_key, "No records key in document");
            return Ok(tally);
        }
        Some(Value::Array(records)) => records,
        Some(_) => return Err(AnalyzeError::NotAList(list_key.to_string())),
    };

    for (index, record) in records.iter().enumerate() {
        let Some(object) = record.as_object() else {
            warn!(index, "Skipping record that is not an object");
            continue;
        };
        tally.increment(&category_of(object.get(field)));
    }

    Ok(tally)
}

/// Reads the JSON document at `path` and tallies `field`.
pub fn try_tally_field(
    path: &Path,
    list_key: &str,
    field: &str,
) -> Result<CategoryTally, AnalyzeError> {
    let content = fs::read_to_string(path).map_err(|source| AnalyzeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: Value = serde_json::from_str(&content)?;
    tally_records(&doc, list_key, field)
}

/// Like [`try_tally_field`], but logs failures and returns an empty tally.
pub fn tally_field(path: &Path, list_key: &str, field: &str) -> CategoryTally {
    match try_tally_field(path, list_key, field) {
        Ok(tally) => {
            if tally.is_empty() {
                warn!(path = %path.display(), list_key, "No records found; tally is empty");
            }
            tally
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "There was an error reading or processing JSON file");
            CategoryTally::new()
        }
    }
}

/// Analyzer counting records per value of one field.
#[derive(Debug, Clone)]
pub struct FieldTally {
    /// Top-level key holding the record list, e.g. `"people"`.
    pub list_key: String,
    pub field: String,
    pub heading: String,
}

impl Analyzer for FieldTally {
    type Report = TallyReport;

    fn name(&self) -> &'static str {
        "JSON"
    }

    fn analyze(&self, path: &Path) -> TallyReport {
        TallyReport {
            heading: self.heading.clone(),
            tally: tally_field(path, &self.list_key, &self.field),
        }
    }
}
