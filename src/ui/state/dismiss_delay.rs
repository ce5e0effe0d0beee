// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss delay domain type for the snackbar.
//!
//! This module provides a type-safe wrapper for the delay, in seconds,
//! after which a shown snackbar hides itself.

use crate::config::{
    DEFAULT_DISMISS_AFTER_SECS, MAX_DISMISS_AFTER_SECS, MIN_DISMISS_AFTER_SECS,
};
use std::time::Duration;

/// Auto-dismiss delay in seconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0.5–60 seconds).
///
/// # Example
///
/// ```
/// use iced_snackbar::ui::state::DismissDelay;
///
/// let delay = DismissDelay::new(4.0);
/// assert_eq!(delay.secs(), 4.0);
///
/// // Values outside range are clamped
/// let too_long = DismissDelay::new(600.0);
/// assert_eq!(too_long.secs(), 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DismissDelay(f32);

impl DismissDelay {
    /// Creates a new delay, clamping to the valid range.
    ///
    /// NaN falls back to the default.
    #[must_use]
    pub fn new(secs: f32) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(MIN_DISMISS_AFTER_SECS, MAX_DISMISS_AFTER_SECS))
    }

    /// Returns the delay in seconds.
    #[must_use]
    pub fn secs(self) -> f32 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f32(self.0)
    }
}

impl Default for DismissDelay {
    fn default() -> Self {
        Self(DEFAULT_DISMISS_AFTER_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(DismissDelay::new(0.0).secs(), MIN_DISMISS_AFTER_SECS);
        assert_eq!(DismissDelay::new(-3.0).secs(), MIN_DISMISS_AFTER_SECS);
        assert_eq!(DismissDelay::new(100.0).secs(), MAX_DISMISS_AFTER_SECS);
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(DismissDelay::new(1.5).secs(), 1.5);
        assert_eq!(DismissDelay::new(60.0).secs(), 60.0);
    }

    #[test]
    fn nan_falls_back_to_default() {
        assert_eq!(DismissDelay::new(f32::NAN), DismissDelay::default());
    }

    #[test]
    fn default_is_four_seconds() {
        assert_eq!(DismissDelay::default().as_duration(), Duration::from_secs(4));
    }

    #[test]
    fn as_duration_converts_fractional_seconds() {
        assert_eq!(
            DismissDelay::new(2.5).as_duration(),
            Duration::from_millis(2500)
        );
    }
}
