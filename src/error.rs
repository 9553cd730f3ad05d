// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the application.
//!
//! Errors carry string payloads so they stay `Clone` and can travel inside
//! UI messages.

use thiserror::Error;

/// Text shown to the user whenever the project collection cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load projects. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure to retrieve a remote or local resource (project list or image).
///
/// All variants are treated the same way by the UI: a single message and a
/// retry affordance. The variant only matters for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connection, TLS...).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status code.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Reading a local resource failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl FetchError {
    /// Returns the human-readable text shown in place of the gallery.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None if err.is_decode() => FetchError::Decode(err.to_string()),
            None => FetchError::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let parse_error = toml::from_str::<toml::Table>("not = valid = toml")
            .expect_err("invalid toml should fail");
        let err: Error = parse_error.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn every_fetch_error_maps_to_the_same_user_message() {
        let errors = [
            FetchError::Network("refused".into()),
            FetchError::Status(500),
            FetchError::Decode("expected value".into()),
            FetchError::Io("missing".into()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);
        }
    }

    #[test]
    fn status_error_display_includes_code() {
        assert_eq!(
            FetchError::Status(503).to_string(),
            "unexpected HTTP status 503"
        );
    }

    #[test]
    fn json_error_converts_to_decode() {
        let err = serde_json::from_str::<Vec<u32>>("{").expect_err("truncated json");
        assert!(matches!(FetchError::from(err), FetchError::Decode(_)));
    }
}
