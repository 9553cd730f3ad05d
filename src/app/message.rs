// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{about, banner, contact, navbar, projects, skills};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Banner(banner::Message),
    About(about::Message),
    Skills(skills::Message),
    Contact(contact::Message),
    Projects(projects::Message),
    /// Animation frame while something is transitioning.
    Tick(Instant),
    /// Vertical offset of the page scrollable, in pixels.
    PageScrolled(f32),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Project collection location (`http(s)://` URL, file path or
    /// `bundled`). Overrides `[projects] source` for this run only.
    pub projects: Option<String>,
    /// Initial hash anchor, e.g. `#projects`.
    pub route: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
