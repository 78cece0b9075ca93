// src/fetch/client.rs

//! HTTP client for release feeds and artifact downloads
//!
//! Wraps reqwest's blocking client for the two transfers the updater makes:
//! fetching a release feed document and streaming an artifact to disk with
//! progress reporting.

use crate::error::{Error, Result};
use crate::manifest::{self, ReleaseEntry};
use crate::progress::{DownloadEvent, ProgressSink};
use reqwest::blocking::Client;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Buffer size for streaming downloads (8 KB)
const STREAM_BUFFER_SIZE: usize = 8192;

/// HTTP client wrapper for release operations
pub struct ReleaseClient {
    client: Client,
}

impl ReleaseClient {
    /// Create a new release client.
    ///
    /// No request timeout is configured: a download blocks until the
    /// transfer finishes or the connection drops.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(None)
            .build()
            .map_err(|e| Error::InitError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Fetch a remote release feed and return its entries in document order
    pub fn fetch_entries(&self, url: &str) -> Result<Vec<ReleaseEntry>> {
        debug!("Fetching release feed from {url}");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::DownloadUnreachable(format!("Failed to fetch {url}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::DownloadUnreachable(format!(
                "HTTP {} from {url}",
                response.status()
            )));
        }

        let body = response.text().map_err(|e| {
            Error::DownloadUnreachable(format!("Failed to read response from {url}: {e}"))
        })?;

        manifest::parse_entries(&body)
    }

    /// Stream a URL to a local file, reporting progress to `sink`.
    ///
    /// Parent directories of the destination are created as needed. Both the
    /// network and file handles are released on every exit path. A failure
    /// mid-stream leaves the partial file in place; callers are expected to
    /// probe the URL before committing to the download.
    pub fn download_file(
        &self,
        url: &str,
        dest_path: &Path,
        sink: &mut dyn ProgressSink,
    ) -> Result<u64> {
        info!("Downloading {} to {}", url, dest_path.display());

        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::IoError(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::DownloadUnreachable(format!("Failed to open {url}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::DownloadUnreachable(format!(
                "HTTP {} from {url}",
                response.status()
            )));
        }

        if let Some(total) = response.content_length() {
            sink.handle(DownloadEvent::SizeKnown(total));
        }

        let mut file = File::create(dest_path).map_err(|e| {
            Error::IoError(format!(
                "Failed to create file {}: {e}",
                dest_path.display()
            ))
        })?;

        let mut transferred: u64 = 0;
        let mut buffer = [0u8; STREAM_BUFFER_SIZE];

        loop {
            let bytes_read = response
                .read(&mut buffer)
                .map_err(|e| Error::IoError(format!("Failed to read response: {e}")))?;

            if bytes_read == 0 {
                break;
            }

            file.write_all(&buffer[..bytes_read])
                .map_err(|e| Error::IoError(format!("Failed to write data: {e}")))?;

            transferred += bytes_read as u64;
            sink.handle(DownloadEvent::BytesTransferred(transferred));
        }

        sink.handle(DownloadEvent::Completed(transferred));
        info!("Downloaded {transferred} bytes to {}", dest_path.display());

        Ok(transferred)
    }
}
