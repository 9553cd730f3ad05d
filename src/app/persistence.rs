// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.

use super::config::{self, Config};
use crate::ui::theming::ThemeMode;

/// Records the new theme in `cfg` and writes it to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the function directly rather than through the update loop.
pub fn persist_theme(cfg: &mut Config, theme_mode: ThemeMode) {
    cfg.general.theme_mode = theme_mode;

    if cfg!(test) {
        return;
    }

    if let Err(error) = config::save(cfg) {
        tracing::warn!(%error, "failed to save config");
    }
}
