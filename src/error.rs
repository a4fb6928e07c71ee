//! Error types for the fetch and analyze stages.
//!
//! Both stages swallow these at their public entry points (the error is
//! logged and a default returned); the typed variants exist so the `try_*`
//! functions can be tested and so log lines say which step failed.

use std::path::PathBuf;
use thiserror::Error;

/// Why a fetch did not produce a local artifact.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Rejected before any network call.
    #[error("the URL provided is empty, please provide a valid URL")]
    EmptyUrl,

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The server answered with a non-2xx status.
    #[error("HTTP error {status} fetching {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Connection, TLS, or body-read failure.
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The JSON fetcher received a body that is not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("error writing to file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why an analyzer fell back to its empty result.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The CSV header has no column with this name.
    #[error("column '{0}' not found in header")]
    MissingColumn(String),

    /// The spreadsheet column letter could not be parsed.
    #[error("'{0}' is not a valid column letter")]
    InvalidColumn(String),

    #[error("workbook has no worksheets")]
    MissingSheet,

    /// The value under the records key is present but is not an array.
    #[error("value under '{0}' is not a list")]
    NotAList(String),
}
