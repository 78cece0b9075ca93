// src/manifest.rs

//! Release manifest loading and queries
//!
//! A manifest is the `releasesData` array of a JSON release feed document.
//! The platform manifest is cached locally and sorted ascending by `index`
//! on load; theme manifests are fetched fresh per operation and keep their
//! document order (most recent release first).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One published version of an artifact (platform core or theme bundle).
///
/// Platform entries carry `index` and `default_theme`; theme entries carry
/// `minimumPhoenixVersion` and no index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseEntry {
    /// Semantic version string, e.g. "2.3.1"
    pub version: String,

    /// Ordering key; unique within a manifest, not necessarily contiguous
    #[serde(default)]
    pub index: i64,

    /// Minimum platform version required for this release (theme entries)
    #[serde(
        rename = "minimumPhoenixVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub minimum_platform_version: Option<String>,

    /// File name of the default theme bundle (platform entries)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_theme: Option<String>,
}

/// Wire shape of a release feed document
#[derive(Debug, Serialize, Deserialize)]
struct ReleaseDocument {
    #[serde(rename = "releasesData")]
    releases_data: Vec<ReleaseEntry>,
}

/// Parse the `releasesData` array out of a feed document, preserving
/// document order.
///
/// JSON syntax errors map to [`Error::ManifestUnreadable`]; structurally
/// valid JSON without the expected shape maps to [`Error::ManifestMalformed`].
pub fn parse_entries(json: &str) -> Result<Vec<ReleaseEntry>> {
    let document: ReleaseDocument = serde_json::from_str(json).map_err(|e| {
        if e.classify() == serde_json::error::Category::Data {
            Error::ManifestMalformed(e.to_string())
        } else {
            Error::ManifestUnreadable(e.to_string())
        }
    })?;

    Ok(document.releases_data)
}

/// Ordered sequence of release entries, sorted ascending by `index`.
///
/// Read-only once loaded; a refresh produces a whole new value.
#[derive(Debug, Clone)]
pub struct Manifest {
    entries: Vec<ReleaseEntry>,
}

impl Manifest {
    /// Build a manifest from raw entries, sorting ascending by `index`.
    ///
    /// The sort is stable, so entries sharing an index keep their document
    /// order.
    pub fn from_entries(mut entries: Vec<ReleaseEntry>) -> Self {
        entries.sort_by_key(|entry| entry.index);
        Self { entries }
    }

    /// Load and sort the manifest from a local JSON cache file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            Error::ManifestUnreadable(format!("failed to read {}: {e}", path.display()))
        })?;

        Ok(Self::from_entries(parse_entries(&json)?))
    }

    /// Entries in ascending index order
    pub fn entries(&self) -> &[ReleaseEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The entry with the greatest index (the most recent release)
    pub fn latest(&self) -> Result<&ReleaseEntry> {
        self.entries.last().ok_or(Error::ManifestEmpty)
    }

    /// Index of the entry whose version matches, or 0 when not found.
    ///
    /// A result of 0 is ambiguous with a real first entry; callers that
    /// care must surface that to the user.
    pub fn index_of(&self, version: &str) -> i64 {
        self.entries
            .iter()
            .find(|entry| entry.version == version)
            .map(|entry| entry.index)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn entry(version: &str, index: i64) -> ReleaseEntry {
        ReleaseEntry {
            version: version.to_string(),
            index,
            minimum_platform_version: None,
            default_theme: None,
        }
    }

    fn write_manifest(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_sorts_ascending_by_index() {
        let file = write_manifest(
            r#"{"releasesData": [
                {"version": "2.0", "index": 3},
                {"version": "1.0", "index": 1},
                {"version": "1.5", "index": 2}
            ]}"#,
        );

        let manifest = Manifest::load(file.path()).unwrap();
        let indexes: Vec<i64> = manifest.entries().iter().map(|e| e.index).collect();
        assert_eq!(indexes, vec![1, 2, 3]);
    }

    #[test]
    fn test_load_accepts_sparse_indexes() {
        let file = write_manifest(
            r#"{"releasesData": [
                {"version": "3.0", "index": 40},
                {"version": "1.0", "index": 7}
            ]}"#,
        );

        let manifest = Manifest::load(file.path()).unwrap();
        assert_eq!(manifest.latest().unwrap().version, "3.0");
        assert_eq!(manifest.latest().unwrap().index, 40);
    }

    #[test]
    fn test_load_missing_file_is_unreadable() {
        let result = Manifest::load(Path::new("/nonexistent/releases.json"));
        assert!(matches!(result, Err(Error::ManifestUnreadable(_))));
    }

    #[test]
    fn test_load_invalid_json_is_unreadable() {
        let file = write_manifest("{not json");
        let result = Manifest::load(file.path());
        assert!(matches!(result, Err(Error::ManifestUnreadable(_))));
    }

    #[test]
    fn test_load_missing_releases_data_is_malformed() {
        let file = write_manifest(r#"{"somethingElse": []}"#);
        let result = Manifest::load(file.path());
        assert!(matches!(result, Err(Error::ManifestMalformed(_))));
    }

    #[test]
    fn test_latest_returns_max_index_entry() {
        let manifest =
            Manifest::from_entries(vec![entry("1.0", 1), entry("3.0", 9), entry("2.0", 2)]);
        let latest = manifest.latest().unwrap();
        assert_eq!(latest.version, "3.0");
        assert_eq!(latest.index, 9);
    }

    #[test]
    fn test_latest_on_empty_manifest() {
        let manifest = Manifest::from_entries(Vec::new());
        assert!(matches!(manifest.latest(), Err(Error::ManifestEmpty)));
    }

    #[test]
    fn test_index_of_known_version() {
        let manifest = Manifest::from_entries(vec![entry("1.0", 1), entry("2.0", 5)]);
        assert_eq!(manifest.index_of("2.0"), 5);
    }

    #[test]
    fn test_index_of_unknown_version_is_zero() {
        let manifest = Manifest::from_entries(vec![entry("1.0", 1)]);
        assert_eq!(manifest.index_of("9.9"), 0);
    }

    #[test]
    fn test_parse_entries_preserves_document_order() {
        // Theme feeds list the most recent release first; no sorting here.
        let entries = parse_entries(
            r#"{"releasesData": [
                {"version": "3.0", "minimumPhoenixVersion": "2.0.0"},
                {"version": "2.0", "minimumPhoenixVersion": "1.0.0"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(entries[0].version, "3.0");
        assert_eq!(
            entries[0].minimum_platform_version.as_deref(),
            Some("2.0.0")
        );
        assert_eq!(entries[1].version, "2.0");
        assert_eq!(entries[0].index, 0);
    }

    #[test]
    fn test_platform_entry_fields() {
        let entries = parse_entries(
            r#"{"releasesData": [
                {"version": "1.1.0", "index": 2, "default_theme": "default.zip"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(entries[0].default_theme.as_deref(), Some("default.zip"));
        assert_eq!(entries[0].minimum_platform_version, None);
    }
}
