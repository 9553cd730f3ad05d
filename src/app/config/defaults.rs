// SPDX-License-Identifier: MPL-2.0
//! Defaults and bounds for every tunable value in `settings.toml`, plus the
//! banner typewriter timings.

/// Default time between two automatic image changes on a card (ms).
pub const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 3000;

/// Minimum carousel interval (ms).
pub const MIN_CAROUSEL_INTERVAL_MS: u64 = 500;

/// Maximum carousel interval (ms).
pub const MAX_CAROUSEL_INTERVAL_MS: u64 = 60_000;

/// Default wait between the start of the close transition and teardown (ms).
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 300;

/// Minimum close delay (ms). Zero is not allowed: the timer must tick once.
pub const MIN_CLOSE_DELAY_MS: u64 = 1;

/// Maximum close delay (ms).
pub const MAX_CLOSE_DELAY_MS: u64 = 5000;

/// Default number of screenshots kept in memory.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 64;

/// Minimum image cache size.
pub const MIN_IMAGE_CACHE_ENTRIES: usize = 8;

/// Maximum image cache size.
pub const MAX_IMAGE_CACHE_ENTRIES: usize = 512;

/// Delay between two typed characters (ms).
pub const TYPEWRITER_TYPE_MS: u64 = 70;

/// Delay between two deleted characters (ms).
pub const TYPEWRITER_DELETE_MS: u64 = 50;

/// Pause once a word is fully typed (ms).
pub const TYPEWRITER_HOLD_MS: u64 = 1000;

// Bounds must bracket their defaults.
const _: () = {
    assert!(MIN_CAROUSEL_INTERVAL_MS > 0);
    assert!(MIN_CAROUSEL_INTERVAL_MS <= DEFAULT_CAROUSEL_INTERVAL_MS);
    assert!(DEFAULT_CAROUSEL_INTERVAL_MS <= MAX_CAROUSEL_INTERVAL_MS);

    assert!(MIN_CLOSE_DELAY_MS > 0);
    assert!(MIN_CLOSE_DELAY_MS <= DEFAULT_CLOSE_DELAY_MS);
    assert!(DEFAULT_CLOSE_DELAY_MS <= MAX_CLOSE_DELAY_MS);

    assert!(MIN_IMAGE_CACHE_ENTRIES > 0);
    assert!(MIN_IMAGE_CACHE_ENTRIES <= DEFAULT_IMAGE_CACHE_ENTRIES);
    assert!(DEFAULT_IMAGE_CACHE_ENTRIES <= MAX_IMAGE_CACHE_ENTRIES);

    assert!(TYPEWRITER_DELETE_MS <= TYPEWRITER_TYPE_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_default_matches_published_site() {
        assert_eq!(DEFAULT_CAROUSEL_INTERVAL_MS, 3000);
    }

    #[test]
    fn close_delay_default_matches_exit_transition() {
        assert_eq!(DEFAULT_CLOSE_DELAY_MS, 300);
    }

    #[test]
    fn typewriter_speeds() {
        assert_eq!(TYPEWRITER_TYPE_MS, 70);
        assert_eq!(TYPEWRITER_DELETE_MS, 50);
        assert_eq!(TYPEWRITER_HOLD_MS, 1000);
    }
}
