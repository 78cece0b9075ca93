// src/lib.rs

//! Phoenix release fetcher
//!
//! Resolves version compatibility across the platform core and its theme
//! bundles, refreshes the locally cached release manifest from the remote
//! feed, probes artifact URLs before committing to a download, and streams
//! archives with progress reporting into the storage layout the platform
//! expects on its next boot.
//!
//! # Architecture
//!
//! - Manifest as a value: loading returns a fresh [`Manifest`]; a refresh
//!   replaces it wholesale, nothing mutates shared state
//! - Conservative probing: a URL counts as absent only on a positively
//!   observed 404; probe errors degrade to "present"
//! - Fatal missing artifacts: the fetch flows are install prerequisites, so
//!   a missing artifact stops the whole sequence

pub mod compat;
pub mod config;
mod error;
pub mod fetch;
pub mod manifest;
pub mod progress;
pub mod releases;

pub use config::{Config, PlatformConfig, ThemeConfig};
pub use error::{Error, Result};
pub use manifest::{Manifest, ReleaseEntry};
pub use progress::{BarSink, CallbackSink, DownloadEvent, ProgressSink, SilentSink};
pub use releases::{ReleaseFetcher, ThemeKind};
