// SPDX-License-Identifier: MPL-2.0
//! Outbound links.
//!
//! External URLs are handed to the platform opener as a fresh, independent
//! navigation: nothing about the current page is passed along. Only web,
//! mail and phone schemes are allowed out.

use reqwest::Url;
use std::process::Command;

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Parses `raw` and checks that it may be opened outside the application.
#[must_use]
pub fn external_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    ALLOWED_SCHEMES
        .contains(&url.scheme())
        .then_some(url)
}

/// Opens `raw` with the system handler. Failures are logged and otherwise
/// ignored.
pub fn open_external(raw: &str) {
    let Some(url) = external_url(raw) else {
        tracing::warn!(url = raw, "refusing to open link");
        return;
    };

    match opener(url.as_str()).spawn() {
        Ok(_) => tracing::debug!(%url, "opened external link"),
        Err(err) => tracing::warn!(%url, error = %err, "failed to open external link"),
    }
}

// No shell in between: `&`, `|` and `^` in a URL stay literal.
#[cfg(target_os = "windows")]
fn opener(url: &str) -> Command {
    let mut command = Command::new("rundll32");
    command.args(["url.dll,FileProtocolHandler", url]);
    command
}

#[cfg(target_os = "macos")]
fn opener(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

/// Builds a `mailto:` link with a pre-filled subject and body.
#[must_use]
pub fn mailto(address: &str, subject: &str, body: &str) -> Option<Url> {
    let mut url = Url::parse(&format!("mailto:{address}")).ok()?;
    url.query_pairs_mut()
        .append_pair("subject", subject)
        .append_pair("body", body);
    Some(url)
}
