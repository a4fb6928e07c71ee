//! Report persistence.
//!
//! Reports are small text files under the processed root, rewritten in full
//! on every run.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Logs a report as pretty-printed JSON at debug level.
pub fn print_json(report: &impl Serialize) -> Result<()> {
    debug!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Writes `report` to `path`, creating parent directories and truncating any
/// previous report.
pub fn write_report(path: &Path, report: &impl Display) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }

    debug!(path = %path.display(), "Writing report");
    fs::write(path, report.to_string())
        .with_context(|| format!("writing report {}", path.display()))?;

    Ok(())
}
