//! The fetch → persist → analyze pipelines, one per format.
//!
//! A pipeline step never aborts its siblings: fetch failures are logged by
//! the fetcher, analysis failures collapse to zero-valued reports, and only
//! a failure to write the report itself is returned to the caller.

use anyhow::Result;
use clap::ValueEnum;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::analyzers::{Analyzer, ColumnPhrase, FieldTally, NumericColumn, TextPhrase};
use crate::config::Settings;
use crate::fetch::{HttpClient, PayloadKind, fetch};
use crate::output::{print_json, write_report};

/// The four supported source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Excel,
    Json,
    Text,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Csv, Format::Excel, Format::Json, Format::Text];

    pub fn payload(self) -> PayloadKind {
        match self {
            Format::Csv => PayloadKind::Csv,
            Format::Excel => PayloadKind::Excel,
            Format::Json => PayloadKind::Json,
            Format::Text => PayloadKind::Text,
        }
    }

    /// Expands an optional selection into the formats to run, in order.
    pub fn selection(format: Option<Format>) -> Vec<Format> {
        match format {
            Some(format) => vec![format],
            None => Format::ALL.to_vec(),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.payload(), f)
    }
}

/// Where a format's fetched artifact lives and where its report goes.
pub fn artifact_paths(settings: &Settings, format: Format) -> (PathBuf, PathBuf) {
    let (file_name, report_name) = match format {
        Format::Csv => (&settings.csv.file_name, &settings.csv.report_name),
        Format::Excel => (&settings.excel.file_name, &settings.excel.report_name),
        Format::Json => (&settings.json.file_name, &settings.json.report_name),
        Format::Text => (&settings.text.file_name, &settings.text.report_name),
    };
    (
        settings.fetched_dir.join(file_name),
        settings.processed_dir.join(report_name),
    )
}

/// Fetches the configured source for `format` into the fetched root.
pub async fn fetch_format<C: HttpClient>(
    client: &C,
    settings: &Settings,
    format: Format,
) -> Option<PathBuf> {
    let (url, file_name) = match format {
        Format::Csv => (&settings.csv.url, &settings.csv.file_name),
        Format::Excel => (&settings.excel.url, &settings.excel.file_name),
        Format::Json => (&settings.json.url, &settings.json.file_name),
        Format::Text => (&settings.text.url, &settings.text.file_name),
    };
    fetch(client, &settings.fetched_dir, file_name, url, format.payload()).await
}

/// Runs `analyzer` over `input` and writes its report to `output`.
///
/// The report is written even when analysis failed, in which case it holds
/// zero or empty values.
#[tracing::instrument(
    skip(analyzer, input, output),
    fields(analyzer = analyzer.name(), input = %input.display(), output = %output.display())
)]
pub fn process<A: Analyzer>(analyzer: &A, input: &Path, output: &Path) -> Result<A::Report> {
    info!("Starting {} processing", analyzer.name());

    let report = analyzer.analyze(input);
    if let Err(e) = print_json(&report) {
        warn!(error = %e, "Could not log report as JSON");
    }
    write_report(output, &report)?;

    info!("Processed {} file, results saved", analyzer.name());
    Ok(report)
}

/// Analyzes the fetched artifact for `format` and returns the report path.
pub fn process_format(settings: &Settings, format: Format) -> Result<PathBuf> {
    let (input, output) = artifact_paths(settings, format);

    match format {
        Format::Csv => {
            let job = &settings.csv;
            let analyzer = NumericColumn {
                column: job.column.clone(),
                label: job.label.clone(),
            };
            process(&analyzer, &input, &output)?;
        }
        Format::Excel => {
            let job = &settings.excel;
            let analyzer = ColumnPhrase {
                column: job.column.clone(),
                phrase: job.phrase.clone(),
            };
            process(&analyzer, &input, &output)?;
        }
        Format::Json => {
            let job = &settings.json;
            let analyzer = FieldTally {
                list_key: job.list_key.clone(),
                field: job.field.clone(),
                heading: job.heading.clone(),
            };
            process(&analyzer, &input, &output)?;
        }
        Format::Text => {
            let analyzer = TextPhrase {
                phrase: settings.text.phrase.clone(),
            };
            process(&analyzer, &input, &output)?;
        }
    }

    Ok(output)
}

/// Fetches then processes `format`.
///
/// A failed fetch does not stop processing: the analyzer runs against
/// whatever artifact is on disk, or logs its absence.
pub async fn run_format<C: HttpClient>(
    client: &C,
    settings: &Settings,
    format: Format,
) -> Result<PathBuf> {
    if fetch_format(client, settings, format).await.is_none() {
        warn!(%format, "Fetch failed; processing any previously fetched artifact");
    }
    process_format(settings, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn settings_in(dir: &Path) -> Settings {
        Settings {
            fetched_dir: dir.join("fetched"),
            processed_dir: dir.join("processed"),
            ..Settings::default()
        }
    }

    struct UnserializableReport;

    impl fmt::Display for UnserializableReport {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            writeln!(f, "Plain text only")
        }
    }

    impl serde::Serialize for UnserializableReport {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("report has no JSON form"))
        }
    }

    struct PlainTextAnalyzer;

    impl Analyzer for PlainTextAnalyzer {
        type Report = UnserializableReport;

        fn name(&self) -> &'static str {
            "plain"
        }

        fn analyze(&self, _path: &Path) -> UnserializableReport {
            UnserializableReport
        }
    }

    #[test]
    fn test_process_writes_report_when_json_dump_fails() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("processed").join("plain.txt");

        process(&PlainTextAnalyzer, &dir.path().join("input.txt"), &output).unwrap();

        assert_eq!(fs::read_to_string(output).unwrap(), "Plain text only\n");
    }

    #[test]
    fn test_selection() {
        assert_eq!(Format::selection(Some(Format::Json)), vec![Format::Json]);
        assert_eq!(Format::selection(None), Format::ALL.to_vec());
    }

    #[test]
    fn test_artifact_paths() {
        let settings = Settings::default();
        let (input, output) = artifact_paths(&settings, Format::Text);
        assert_eq!(input, PathBuf::from("fetched_data/geographical_characters.txt"));
        assert_eq!(
            output,
            PathBuf::from("processed_data/capital_letters_word_count.txt")
        );
    }

    #[test]
    fn test_process_json_writes_tally_report() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        fs::create_dir_all(&settings.fetched_dir).unwrap();
        fs::write(
            settings.fetched_dir.join("people.json"),
            r#"{"people":[{"gender":"male"},{"gender":"female"},{"gender":"male"}]}"#,
        )
        .unwrap();

        let output = process_format(&settings, Format::Json).unwrap();

        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "People By Gender:\nmale: 2\nfemale: 1\n"
        );
    }

    #[test]
    fn test_process_without_fetched_file_still_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());

        let output = process_format(&settings, Format::Text).unwrap();

        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "Occurrences of 'CAPITAL LETTER': 0\n"
        );
    }

    #[test]
    fn test_process_csv_without_valid_values_is_zero_filled() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        fs::create_dir_all(&settings.fetched_dir).unwrap();
        fs::write(
            settings.fetched_dir.join("pokemon_all_generations.csv"),
            "Name,Speed\nMissingNo,???\n",
        )
        .unwrap();

        let output = process_format(&settings, Format::Csv).unwrap();
        let content = fs::read_to_string(output).unwrap();

        assert!(content.starts_with("Pokémon Speed Statistics:\n"));
        assert!(content.contains("Mean: 0.00\n"));
    }
}
