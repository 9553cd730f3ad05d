// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first source that yields a directory wins:
//!
//! 1. an explicit override passed by the caller (tests)
//! 2. `--config-dir`, recorded once at startup with [`init_cli_override`]
//! 3. the `ICED_FOLIO_CONFIG_DIR` environment variable, when non-empty
//! 4. `<platform config dir>/IcedFolio`, via the `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "IcedFolio";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_FOLIO_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Only the first call counts.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized");
    }
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().cloned().flatten()
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn platform_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME))
}

/// Directory holding the application config, or `None` when no source can
/// provide one (no home directory, for instance).
///
/// Platform defaults:
/// - Linux: `~/.config/IcedFolio/`
/// - macOS: `~/Library/Application Support/IcedFolio/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedFolio\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Same as [`get_app_config_dir`], with `override_path` checked first.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(cli_config_dir)
        .or_else(env_config_dir)
        .or_else(platform_config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below mutate the process environment.
    static ENV_GUARD: Mutex<()> = Mutex::new(());

    fn with_env<T>(value: Option<&str>, body: impl FnOnce() -> T) -> T {
        let _guard = ENV_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        match value {
            Some(v) => std::env::set_var(ENV_CONFIG_DIR, v),
            None => std::env::remove_var(ENV_CONFIG_DIR),
        }
        let result = body();
        std::env::remove_var(ENV_CONFIG_DIR);
        result
    }

    #[test]
    fn explicit_override_beats_environment() {
        let chosen = with_env(Some("/from/env"), || {
            get_app_config_dir_with_override(Some(PathBuf::from("/explicit")))
        });
        assert_eq!(chosen, Some(PathBuf::from("/explicit")));
    }

    #[test]
    fn environment_is_used_when_set() {
        let chosen = with_env(Some("/from/env"), get_app_config_dir);
        assert_eq!(chosen, Some(PathBuf::from("/from/env")));
    }

    #[test]
    fn empty_environment_falls_through_to_platform_dir() {
        let chosen = with_env(Some(""), get_app_config_dir);
        if let Some(path) = chosen {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
