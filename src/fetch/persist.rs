//! Writers for fetched payloads. Each creates missing parent directories and
//! replaces whatever was at the target path.

use crate::error::FetchError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

fn prepare(folder: &Path, filename: &str) -> Result<PathBuf, FetchError> {
    let path = folder.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| FetchError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(path)
}

fn write_all(path: PathBuf, contents: &[u8]) -> Result<PathBuf, FetchError> {
    info!(path = %path.display(), bytes = contents.len(), "Writing data");
    fs::write(&path, contents).map_err(|source| FetchError::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "SUCCESS: data written");
    Ok(path)
}

/// Writes decoded text (CSV or plain text) to `folder/filename`.
pub fn write_text_file(folder: &Path, filename: &str, text: &str) -> Result<PathBuf, FetchError> {
    let path = prepare(folder, filename)?;
    write_all(path, text.as_bytes())
}

/// Writes an opaque payload such as a workbook, byte for byte.
pub fn write_binary_file(folder: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, FetchError> {
    let path = prepare(folder, filename)?;
    write_all(path, bytes)
}

/// Writes a JSON document with four-space indentation.
pub fn write_json_file(
    folder: &Path,
    filename: &str,
    value: &serde_json::Value,
) -> Result<PathBuf, FetchError> {
    let path = prepare(folder, filename)?;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;

    write_all(path, &buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_text_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("nested").join("fetched");

        let path = write_text_file(&folder, "romeo.txt", "But soft").unwrap();

        assert_eq!(path, folder.join("romeo.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "But soft");
    }

    #[test]
    fn test_write_text_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();

        write_text_file(dir.path(), "a.csv", "first,run\n1,2\n").unwrap();
        let path = write_text_file(dir.path(), "a.csv", "second\n").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "second\n");
    }

    #[test]
    fn test_write_binary_file_is_byte_exact() {
        let dir = tempfile::tempdir().unwrap();
        let bytes = [0x50, 0x4B, 0x03, 0x04, 0x00, 0xFF, 0x10];

        let path = write_binary_file(dir.path(), "book.xlsx", &bytes).unwrap();

        assert_eq!(fs::read(path).unwrap(), bytes);
    }

    #[test]
    fn test_write_json_file_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let value = json!({"people": [{"craft": "ISS"}]});

        let path = write_json_file(dir.path(), "astros.json", &value).unwrap();
        let content = fs::read_to_string(path).unwrap();

        assert!(content.contains("\n    \"people\": ["));
        assert!(content.contains("\n            \"craft\": \"ISS\""));
        let reparsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(reparsed, value);
    }

    #[test]
    fn test_write_into_file_path_fails_with_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = write_text_file(&blocker, "out.txt", "data");

        assert!(matches!(result, Err(FetchError::Io { .. })));
    }
}
