// src/fetch/probe.rs

//! Remote artifact existence probing
//!
//! A header-only probe issued before committing to a download. The policy is
//! conservative: a URL counts as absent only when the probe positively saw a
//! 404, directly or at the end of a bounded redirect chain. Everything else,
//! including probe errors of any kind, counts as present; callers tolerate
//! the occasional false positive and let the download itself fail.

use crate::error::{Error, Result};
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use tracing::debug;
use url::Url;

/// Maximum hops collected while following redirects
const MAX_PROBE_HOPS: usize = 8;

/// Check whether a URL resolves to existing content.
///
/// Network errors, invalid URLs, and client construction failures all
/// degrade to `true`.
pub fn url_exists(url: &str) -> bool {
    match collect_status_lines(url) {
        Ok(lines) => !is_absent(&lines),
        Err(e) => {
            debug!("probe of {url} inconclusive ({e}); assuming present");
            true
        }
    }
}

/// Decide absence from the status lines of a probe, one line per hop.
///
/// Absent means: the first status line carries a 404, or the probe entered a
/// 302 redirect chain whose final bounded hop (index 7) carries a 404. A
/// shorter redirect chain ending in a 404 still counts as present.
fn is_absent(status_lines: &[String]) -> bool {
    let Some(first) = status_lines.first() else {
        return false;
    };

    if first.contains("404 Not Found") {
        return true;
    }

    if first.contains("302 Found") {
        if let Some(last_hop) = status_lines.get(MAX_PROBE_HOPS - 1) {
            return last_hop.contains("404 Not Found");
        }
    }

    false
}

/// Issue HEAD requests along the redirect chain, collecting one status line
/// per hop, bounded at [`MAX_PROBE_HOPS`].
fn collect_status_lines(url: &str) -> Result<Vec<String>> {
    let client = Client::builder()
        .redirect(Policy::none())
        .timeout(None)
        .build()
        .map_err(|e| Error::InitError(format!("Failed to create HTTP client: {e}")))?;

    let mut current = Url::parse(url)
        .map_err(|e| Error::DownloadUnreachable(format!("invalid URL {url}: {e}")))?;
    let mut lines = Vec::new();

    for _ in 0..MAX_PROBE_HOPS {
        let response = client
            .head(current.clone())
            .send()
            .map_err(|e| Error::DownloadUnreachable(format!("probe of {current} failed: {e}")))?;

        let status = response.status();
        lines.push(format!(
            "{:?} {} {}",
            response.version(),
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        ));

        if !status.is_redirection() {
            break;
        }

        let Some(location) = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
        else {
            break;
        };

        current = current.join(location).map_err(|e| {
            Error::DownloadUnreachable(format!("bad redirect target {location}: {e}"))
        })?;
    }

    Ok(lines)
}
