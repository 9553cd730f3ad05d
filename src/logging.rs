// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//! `RUST_LOG` takes precedence when set; otherwise this crate logs at the
//! requested level and everything else (iced, wgpu, reqwest) at `warn`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LEVEL: &str = "info";

/// Filter used when `RUST_LOG` is not set.
#[must_use]
pub fn default_directives(level: &str) -> String {
    format!("{}={level},warn", env!("CARGO_CRATE_NAME"))
}

/// Installs the global subscriber. Calling it twice is harmless: the second
/// call is ignored.
pub fn init(level: Option<&str>) {
    let level = level.unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(level)))
        .unwrap_or_else(|_| EnvFilter::new(default_directives(DEFAULT_LEVEL)));

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_target_this_crate() {
        assert_eq!(default_directives("debug"), "iced_folio=debug,warn");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(Some("debug"));
        init(None);
    }
}
