// SPDX-License-Identifier: MPL-2.0
//! One-shot retrieval of the project collection.
//!
//! The collection comes from one of three places: an HTTP(S) endpoint, a
//! local JSON file, or the copy embedded in the binary. Whatever the origin,
//! the body must be a JSON array of records with unique ids. There is no
//! caching, paging or streaming: a call either yields the whole collection or
//! a [`FetchError`].

use super::record::{validate_unique_ids, ProjectRecord};
use crate::error::FetchError;
use rust_embed::RustEmbed;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct BundledAssets;

const BUNDLED_FILE: &str = "projects.json";
const USER_AGENT: &str = concat!("IcedFolio/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Where the collection is read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectSource {
    Http(String),
    File(PathBuf),
    #[default]
    Bundled,
}

impl ProjectSource {
    /// Interprets a user supplied location.
    ///
    /// `http://` and `https://` prefixes select HTTP, the literal `bundled`
    /// selects the embedded copy, anything else is treated as a file path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            ProjectSource::Http(trimmed.to_string())
        } else if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("bundled") {
            ProjectSource::Bundled
        } else {
            ProjectSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for ProjectSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectSource::Http(url) => f.write_str(url),
            ProjectSource::File(path) => write!(f, "{}", path.display()),
            ProjectSource::Bundled => f.write_str("bundled"),
        }
    }
}

/// Fetches and decodes the whole collection.
///
/// # Errors
///
/// Any transport failure, non-2xx status, unreadable file or malformed body
/// is reported as a [`FetchError`].
pub async fn load(source: ProjectSource) -> Result<Vec<ProjectRecord>, FetchError> {
    tracing::debug!(%source, "loading projects");

    let result = match &source {
        ProjectSource::Http(url) => fetch_http(url).await,
        ProjectSource::File(path) => tokio::fs::read(path)
            .await
            .map_err(FetchError::from)
            .and_then(|bytes| decode(&bytes)),
        ProjectSource::Bundled => BundledAssets::get(BUNDLED_FILE)
            .ok_or_else(|| FetchError::Io(format!("{BUNDLED_FILE} is not embedded")))
            .and_then(|file| decode(&file.data)),
    };

    match &result {
        Ok(records) => tracing::info!(%source, count = records.len(), "projects loaded"),
        Err(err) => tracing::warn!(%source, error = %err, "failed to load projects"),
    }
    result
}

async fn fetch_http(url: &str) -> Result<Vec<ProjectRecord>, FetchError> {
    let client = http_client()?;
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    decode(&body)
}

/// Shared client settings for every outbound request.
pub(crate) fn http_client() -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| FetchError::Network(e.to_string()))
}

/// Decodes a JSON array of records and checks id uniqueness.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] for malformed JSON, a non-array body, or
/// duplicated ids.
pub fn decode(bytes: &[u8]) -> Result<Vec<ProjectRecord>, FetchError> {
    let records: Vec<ProjectRecord> = serde_json::from_slice(bytes)?;
    validate_unique_ids(&records)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::record::ProjectId;
    use tempfile::tempdir;

    #[test]
    fn parse_distinguishes_sources() {
        assert_eq!(
            ProjectSource::parse("https://site.test/projects.json"),
            ProjectSource::Http("https://site.test/projects.json".into())
        );
        assert_eq!(ProjectSource::parse("bundled"), ProjectSource::Bundled);
        assert_eq!(ProjectSource::parse("  "), ProjectSource::Bundled);
        assert_eq!(
            ProjectSource::parse("data/projects.json"),
            ProjectSource::File(PathBuf::from("data/projects.json"))
        );
    }

    #[test]
    fn decode_rejects_non_array_body() {
        let err = decode(br#"{"id": 1}"#).expect_err("object is not a collection");
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn decode_rejects_html_error_pages() {
        let err = decode(b"<html>Internal Server Error</html>").expect_err("not json");
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn decode_accepts_empty_collection() {
        assert!(decode(b"[]").expect("empty array").is_empty());
    }

    #[test]
    fn bundled_collection_is_valid() {
        let file = BundledAssets::get(BUNDLED_FILE).expect("bundled file present");
        let records = decode(&file.data).expect("bundled data decodes");
        assert!(!records.is_empty());
        assert!(records.iter().any(|r| r.has_carousel()));
    }

    #[tokio::test]
    async fn load_reads_local_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("projects.json");
        std::fs::write(
            &path,
            r#"[{"id": 3, "name": "Local", "description": "from disk"}]"#,
        )
        .expect("failed to write projects file");

        let records = load(ProjectSource::File(path)).await.expect("file loads");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, ProjectId::Number(3));
    }

    #[tokio::test]
    async fn load_reports_missing_file_as_io() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = load(ProjectSource::File(dir.path().join("absent.json")))
            .await
            .expect_err("missing file");
        assert!(matches!(err, FetchError::Io(_)));
    }

    #[tokio::test]
    async fn load_bundled_matches_decode() {
        let records = load(ProjectSource::Bundled).await.expect("bundled loads");
        let file = BundledAssets::get(BUNDLED_FILE).expect("bundled file present");
        assert_eq!(records, decode(&file.data).expect("decodes"));
    }
}
