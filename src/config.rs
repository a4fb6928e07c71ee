//! Pipeline settings.
//!
//! Defaults describe the four built-in pipelines. A JSON file may override
//! any subset of keys:
//! ```json
//! {
//!   "fetched_dir": "example_data",
//!   "text": { "url": "https://example.com/romeo.txt", "phrase": "Romeo" }
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Numeric-column statistics over a fetched CSV file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvJob {
    pub url: String,
    pub file_name: String,
    pub report_name: String,
    pub column: String,
    pub label: String,
}

impl Default for CsvJob {
    fn default() -> Self {
        Self {
            url: "https://raw.githubusercontent.com/KeithGalli/pandas/master/pokemon_data.csv"
                .into(),
            file_name: "pokemon_all_generations.csv".into(),
            report_name: "pokemon_speed_stats.txt".into(),
            column: "Speed".into(),
            label: "Pokémon Speed".into(),
        }
    }
}

/// Phrase count in one column of a fetched workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcelJob {
    pub url: String,
    pub file_name: String,
    pub report_name: String,
    /// Column letter, e.g. `"C"`.
    pub column: String,
    pub phrase: String,
}

impl Default for ExcelJob {
    fn default() -> Self {
        Self {
            url: "https://github.com/microsoft/powerbi-desktop-samples/raw/main/AdventureWorks%20Sales%20Sample/AdventureWorks%20Sales.xlsx".into(),
            file_name: "adventure_works_sales.xlsx".into(),
            report_name: "adventure_works_usa_count.txt".into(),
            column: "C".into(),
            phrase: "United States".into(),
        }
    }
}

/// Category tally over records in a fetched JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonJob {
    pub url: String,
    pub file_name: String,
    pub report_name: String,
    pub list_key: String,
    pub field: String,
    pub heading: String,
}

impl Default for JsonJob {
    fn default() -> Self {
        Self {
            url: "https://filesamples.com/samples/code/json/sample4.json".into(),
            file_name: "people.json".into(),
            report_name: "people_by_gender.txt".into(),
            list_key: "people".into(),
            field: "gender".into(),
            heading: "People By Gender".into(),
        }
    }
}

/// Phrase count over a fetched text file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextJob {
    pub url: String,
    pub file_name: String,
    pub report_name: String,
    pub phrase: String,
}

impl Default for TextJob {
    fn default() -> Self {
        Self {
            url: "https://www.w3.org/TR/2003/REC-PNG-20031110/iso_8859-1.txt".into(),
            file_name: "geographical_characters.txt".into(),
            report_name: "capital_letters_word_count.txt".into(),
            phrase: "CAPITAL LETTER".into(),
        }
    }
}

/// Roots and per-format jobs. Paths are relative to the working directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fetched_dir: PathBuf,
    pub processed_dir: PathBuf,
    pub csv: CsvJob,
    pub excel: ExcelJob,
    pub json: JsonJob,
    pub text: TextJob,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fetched_dir: PathBuf::from("fetched_data"),
            processed_dir: PathBuf::from("processed_data"),
            csv: CsvJob::default(),
            excel: ExcelJob::default(),
            json: JsonJob::default(),
            text: TextJob::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file at `path`; omitted keys keep their
    /// defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("parsing settings file {}", path.display()))?;
        Ok(settings)
    }

    /// Returns defaults when `path` is `None`.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
