//! Fetchers: one HTTP GET, then the payload is persisted under the fetched
//! root exactly as received.
//!
//! [`fetch`] is the entry point the pipelines use. It never returns an error;
//! every failure is logged and reported as `None`. [`try_fetch`] exposes the
//! typed [`FetchError`] for callers that want it.

mod basic;
mod client;
mod persist;

pub use basic::BasicClient;
pub use client::HttpClient;
pub use persist::{write_binary_file, write_json_file, write_text_file};

use crate::error::FetchError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info};

/// Shape of the remote payload, which decides how it is written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// Decoded as text and written as-is.
    Text,
    /// Same as [`PayloadKind::Text`]; kept separate for log messages.
    Csv,
    /// Raw bytes, written in binary mode.
    Excel,
    /// Decoded as JSON and re-encoded with four-space indentation.
    Json,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PayloadKind::Text => "text",
            PayloadKind::Csv => "CSV",
            PayloadKind::Excel => "Excel",
            PayloadKind::Json => "JSON",
        };
        f.write_str(name)
    }
}

/// Issues a GET for `url` and returns the response if the status is 2xx.
///
/// # Errors
///
/// [`FetchError::EmptyUrl`] is returned before anything touches the network.
pub async fn send_get<C: HttpClient>(client: &C, url: &str) -> Result<reqwest::Response, FetchError> {
    if url.trim().is_empty() {
        return Err(FetchError::EmptyUrl);
    }

    let parsed = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    let req = reqwest::Request::new(reqwest::Method::GET, parsed);

    let resp = client.execute(req).await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    Ok(resp)
}

/// Fetches `url` and returns the raw body.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>, FetchError> {
    let resp = send_get(client, url).await?;
    Ok(resp.bytes().await?.to_vec())
}

/// Fetches `url` and writes the payload to `folder/filename`, replacing any
/// existing file.
pub async fn try_fetch<C: HttpClient>(
    client: &C,
    folder: &Path,
    filename: &str,
    url: &str,
    kind: PayloadKind,
) -> Result<PathBuf, FetchError> {
    let path = match kind {
        PayloadKind::Text | PayloadKind::Csv => {
            let body = send_get(client, url).await?.text().await?;
            debug!(bytes = body.len(), "Text body received");
            write_text_file(folder, filename, &body)?
        }
        PayloadKind::Excel => {
            let body = fetch_bytes(client, url).await?;
            debug!(bytes = body.len(), "Binary body received");
            write_binary_file(folder, filename, &body)?
        }
        PayloadKind::Json => {
            let body = send_get(client, url).await?.text().await?;
            debug!(bytes = body.len(), "JSON body received, decoding");
            let value: serde_json::Value = serde_json::from_str(&body)?;
            write_json_file(folder, filename, &value)?
        }
    };
    Ok(path)
}

/// Fetches `url` into `folder/filename`, logging progress and any failure.
///
/// Returns the written path on success and `None` on failure. Failures are
/// never propagated: an empty URL, a non-2xx status, a transport error, an
/// undecodable JSON body, or a write error all end in an `error!` line and
/// no new artifact.
#[tracing::instrument(skip(client, folder, kind), fields(folder = %folder.display(), kind = %kind))]
pub async fn fetch<C: HttpClient>(
    client: &C,
    folder: &Path,
    filename: &str,
    url: &str,
    kind: PayloadKind,
) -> Option<PathBuf> {
    info!(url, "Fetching {kind} data");
    let start = Instant::now();

    match try_fetch(client, folder, filename, url, kind).await {
        Ok(path) => {
            info!(
                path = %path.display(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "SUCCESS: {kind} file fetched and saved as {filename}"
            );
            Some(path)
        }
        Err(e) => {
            error!(url, error = %e, "{kind} fetch failed");
            None
        }
    }
}
