// src/releases.rs

//! Per-artifact fetch flows
//!
//! Ties manifest loading, compatibility resolution, probing, and streaming
//! downloads together for the three artifact families: the platform core
//! release, the admin theme, and the default frontend theme.
//!
//! A missing artifact is fatal ([`Error::ArtifactMissing`]): these fetches
//! are prerequisites for an install or upgrade that cannot proceed
//! partially, so callers stop the whole flow on the first failure.

use crate::compat;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::fetch::{self, ReleaseClient};
use crate::manifest::Manifest;
use crate::progress::ProgressSink;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Theme artifact families, versioned independently of the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    /// Admin backend theme
    Admin,
    /// Default frontend theme
    Default,
}

impl ThemeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKind::Admin => "admin theme",
            ThemeKind::Default => "default theme",
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orchestrates release fetches against the configured endpoints.
///
/// The platform manifest is an explicit value returned from
/// [`load_manifest`](Self::load_manifest) and
/// [`refresh_manifest`](Self::refresh_manifest); a refresh replaces it
/// wholesale rather than mutating shared state.
pub struct ReleaseFetcher {
    config: Config,
    client: ReleaseClient,
}

impl ReleaseFetcher {
    pub fn new(config: Config) -> Result<Self> {
        let client = ReleaseClient::new()?;
        Ok(Self { config, client })
    }

    /// Load the platform manifest from the local cache file
    pub fn load_manifest(&self) -> Result<Manifest> {
        Manifest::load(&self.config.manifest_path)
    }

    /// Refresh the platform manifest from the remote feed.
    ///
    /// When the feed URL does not probe as present, the cached manifest is
    /// kept as-is; that is an informational outcome, not an error. Otherwise
    /// the remote document is streamed over the local cache file and the
    /// manifest reloaded from it.
    pub fn refresh_manifest(&self, sink: &mut dyn ProgressSink) -> Result<Manifest> {
        let url = &self.config.platform.releases_url;

        if !fetch::url_exists(url) {
            info!("release feed at {url} did not resolve; keeping the cached manifest");
            return self.load_manifest();
        }

        self.client
            .download_file(url, &self.config.manifest_path, sink)?;
        self.load_manifest()
    }

    /// Download a platform core release archive to `releases/<version>.zip`
    pub fn fetch_platform_release(
        &self,
        version: &str,
        sink: &mut dyn ProgressSink,
    ) -> Result<PathBuf> {
        let url = format!("{}{version}.zip", self.config.platform.download_url);
        info!("platform release: {url}");

        if !fetch::url_exists(&url) {
            return Err(Error::ArtifactMissing {
                artifact: format!("platform release {version}"),
                url,
            });
        }

        let dest = self.config.releases_dir().join(format!("{version}.zip"));
        self.client.download_file(&url, &dest, sink)?;

        Ok(dest)
    }

    /// Download the theme bundle compatible with `platform_version` to
    /// `themes/<file name>`.
    ///
    /// The theme's own release feed is fetched fresh on every call and
    /// trusted in document order (most recent release first). `file_name`
    /// overrides the configured bundle name; the default theme's name can
    /// come from the platform manifest's latest entry.
    pub fn fetch_theme(
        &self,
        kind: ThemeKind,
        platform_version: &str,
        file_name: Option<&str>,
        sink: &mut dyn ProgressSink,
    ) -> Result<PathBuf> {
        let theme = self.config.theme(kind);
        let file_name = file_name.unwrap_or(&theme.file_name);

        let candidates = self.client.fetch_entries(&theme.releases_url)?;
        let release = compat::resolve_compatible(&candidates, platform_version).ok_or_else(
            || Error::NoCompatibleRelease {
                artifact: kind.to_string(),
                platform_version: platform_version.to_string(),
            },
        )?;

        let url = format!("{}/{}/{file_name}", theme.download_url, release.version);
        info!("{kind}: {url}");

        if !fetch::url_exists(&url) {
            return Err(Error::ArtifactMissing {
                artifact: kind.to_string(),
                url,
            });
        }

        let dest = self.config.themes_dir().join(file_name);
        self.client.download_file(&url, &dest, sink)?;

        Ok(dest)
    }
}
