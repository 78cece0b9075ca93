// src/fetch/mod.rs

//! Network plumbing for release fetching
//!
//! This module provides:
//! - An HTTP client for release feeds and streaming artifact downloads
//! - Existence probing of artifact URLs ahead of a committed download

mod client;
mod probe;

pub use client::ReleaseClient;
pub use probe::url_exists;
