// src/error.rs

//! Error types for the release fetcher

use thiserror::Error;

/// Errors produced while loading manifests and fetching release artifacts
#[derive(Error, Debug)]
pub enum Error {
    /// Local manifest file is missing, unreadable, or not valid JSON
    #[error("release manifest unreadable: {0}")]
    ManifestUnreadable(String),

    /// Manifest parsed as JSON but does not carry the expected shape
    #[error("release manifest malformed: {0}")]
    ManifestMalformed(String),

    /// Manifest carries zero release entries
    #[error("release manifest has no entries")]
    ManifestEmpty,

    /// Remote fetch failed outright (connect failure or error status)
    #[error("download unreachable: {0}")]
    DownloadUnreachable(String),

    /// Probe reported the artifact absent; the fetch flow must stop here
    #[error("{artifact} is missing at {url}; the URL is either not correct or the file is no longer there")]
    ArtifactMissing { artifact: String, url: String },

    /// No release in the candidate feed satisfies the platform version
    #[error("no {artifact} release is compatible with platform version {platform_version}")]
    NoCompatibleRelease {
        artifact: String,
        platform_version: String,
    },

    /// Local filesystem failure
    #[error("I/O error: {0}")]
    IoError(String),

    /// Failure while constructing a component (e.g. the HTTP client)
    #[error("initialization error: {0}")]
    InitError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
