// SPDX-License-Identifier: MPL-2.0
//! Timing domain types for the project gallery.
//!
//! Both wrappers clamp on construction so a hand-edited config can never
//! produce a zero-length or absurdly long timer.

use crate::app::config::{
    DEFAULT_CAROUSEL_INTERVAL_MS, DEFAULT_CLOSE_DELAY_MS, MAX_CAROUSEL_INTERVAL_MS,
    MAX_CLOSE_DELAY_MS, MIN_CAROUSEL_INTERVAL_MS, MIN_CLOSE_DELAY_MS,
};
use std::time::Duration;

/// Time between two automatic image changes on a project card.
///
/// # Example
///
/// ```
/// use iced_folio::ui::state::CarouselInterval;
///
/// let interval = CarouselInterval::new(4000);
/// assert_eq!(interval.value(), 4000);
///
/// // Values outside range are clamped
/// assert_eq!(CarouselInterval::new(10).value(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarouselInterval(u64);

impl CarouselInterval {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_CAROUSEL_INTERVAL_MS, MAX_CAROUSEL_INTERVAL_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for CarouselInterval {
    fn default() -> Self {
        Self(DEFAULT_CAROUSEL_INTERVAL_MS)
    }
}

/// Wait between the start of the modal exit transition and its teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CloseDelay(u64);

impl CloseDelay {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_CLOSE_DELAY_MS, MAX_CLOSE_DELAY_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for CloseDelay {
    fn default() -> Self {
        Self(DEFAULT_CLOSE_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_interval_clamps_to_valid_range() {
        assert_eq!(CarouselInterval::new(0).value(), MIN_CAROUSEL_INTERVAL_MS);
        assert_eq!(
            CarouselInterval::new(u64::MAX).value(),
            MAX_CAROUSEL_INTERVAL_MS
        );
        assert_eq!(CarouselInterval::new(2500).value(), 2500);
    }

    #[test]
    fn close_delay_never_zero() {
        assert_eq!(CloseDelay::new(0).value(), MIN_CLOSE_DELAY_MS);
        assert!(!CloseDelay::new(0).as_duration().is_zero());
    }

    #[test]
    fn defaults_match_constants() {
        assert_eq!(
            CarouselInterval::default().as_duration(),
            Duration::from_millis(3000)
        );
        assert_eq!(CloseDelay::default().as_duration(), Duration::from_millis(300));
    }
}
