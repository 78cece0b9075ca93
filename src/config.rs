// src/config.rs

//! Updater configuration
//!
//! Names the remote endpoints and local paths the fetch flows operate on.
//! Loaded from a TOML file; every field has a default, so the tool runs
//! unconfigured against the official release endpoints.

use crate::error::{Error, Result};
use crate::releases::ThemeKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Endpoints for the platform core artifact family
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Remote release feed for the platform core
    pub releases_url: String,
    /// Base URL the versioned core archives hang off; the version and
    /// ".zip" are appended directly, so this usually ends with "/"
    pub download_url: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            releases_url: "https://releases.phoenix-cms.org/phoenix/releases.json".to_string(),
            download_url: "https://releases.phoenix-cms.org/phoenix/".to_string(),
        }
    }
}

/// Endpoints for one theme artifact family.
///
/// When a theme table is overridden in the config file, all three keys must
/// be given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Remote release feed for this theme
    pub releases_url: String,
    /// Base URL theme bundles hang off as `<base>/<version>/<file_name>`
    pub download_url: String,
    /// Bundle file name, also used for placement under the themes directory
    pub file_name: String,
}

/// Complete updater configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Local platform manifest cache file
    pub manifest_path: PathBuf,
    /// Root directory artifacts are placed under
    pub storage_dir: PathBuf,
    pub platform: PlatformConfig,
    pub admin_theme: ThemeConfig,
    pub default_theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from("releases.json"),
            storage_dir: PathBuf::from("storage"),
            platform: PlatformConfig::default(),
            admin_theme: ThemeConfig {
                releases_url: "https://releases.phoenix-cms.org/themes/admin/releases.json"
                    .to_string(),
                download_url: "https://releases.phoenix-cms.org/themes/admin".to_string(),
                file_name: "admin.zip".to_string(),
            },
            default_theme: ThemeConfig {
                releases_url: "https://releases.phoenix-cms.org/themes/default/releases.json"
                    .to_string(),
                download_url: "https://releases.phoenix-cms.org/themes/default".to_string(),
                file_name: "default.zip".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            Error::IoError(format!("Failed to read config {}: {e}", path.display()))
        })?;

        toml::from_str(&raw)
            .map_err(|e| Error::InitError(format!("Invalid config {}: {e}", path.display())))
    }

    /// Load from an explicit path, from the default location when a file
    /// exists there, or fall back to built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Default config file location under the user configuration directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("phoenix-updater").join("config.toml"))
    }

    /// Endpoint set for a theme family
    pub fn theme(&self, kind: ThemeKind) -> &ThemeConfig {
        match kind {
            ThemeKind::Admin => &self.admin_theme,
            ThemeKind::Default => &self.default_theme,
        }
    }

    /// Platform release archives land here
    pub fn releases_dir(&self) -> PathBuf {
        self.storage_dir.join("releases")
    }

    /// Theme bundles land here
    pub fn themes_dir(&self) -> PathBuf {
        self.storage_dir.join("themes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.manifest_path, PathBuf::from("releases.json"));
        assert_eq!(config.releases_dir(), PathBuf::from("storage/releases"));
        assert_eq!(config.themes_dir(), PathBuf::from("storage/themes"));
        assert!(config.platform.download_url.ends_with('/'));
    }

    #[test]
    fn test_theme_lookup() {
        let config = Config::default();
        assert_eq!(config.theme(ThemeKind::Admin).file_name, "admin.zip");
        assert_eq!(config.theme(ThemeKind::Default).file_name, "default.zip");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(r#"storage_dir = "/srv/phoenix/storage""#).unwrap();
        assert_eq!(config.storage_dir, PathBuf::from("/srv/phoenix/storage"));
        assert_eq!(
            config.platform.releases_url,
            PlatformConfig::default().releases_url
        );
        assert_eq!(config.admin_theme.file_name, "admin.zip");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
manifest_path = "/srv/phoenix/releases.json"

[platform]
releases_url = "https://example.com/releases.json"
download_url = "https://example.com/core/"

[admin_theme]
releases_url = "https://example.com/admin/releases.json"
download_url = "https://example.com/admin"
file_name = "admin-spa.zip"
"#,
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(
            config.manifest_path,
            PathBuf::from("/srv/phoenix/releases.json")
        );
        assert_eq!(config.platform.download_url, "https://example.com/core/");
        assert_eq!(config.admin_theme.file_name, "admin-spa.zip");
        // Untouched table falls back to the built-in endpoints
        assert_eq!(config.default_theme.file_name, "default.zip");
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = Config::load(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_load_or_default_without_path() {
        // No explicit path and (typically) no user config file: defaults.
        let config = Config::load_or_default(None).unwrap();
        assert!(!config.platform.releases_url.is_empty());
    }
}
