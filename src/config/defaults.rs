// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Dismiss**: Auto-dismiss delay and tap behavior
//! - **Layout**: Extra bottom padding
//!
//! Default warning and error colors live in the design token palette.

// ==========================================================================
// Dismiss Defaults
// ==========================================================================

/// Default delay before a shown snackbar hides itself (in seconds).
pub const DEFAULT_DISMISS_AFTER_SECS: f32 = 4.0;

/// Minimum auto-dismiss delay (in seconds).
pub const MIN_DISMISS_AFTER_SECS: f32 = 0.5;

/// Maximum auto-dismiss delay (in seconds).
pub const MAX_DISMISS_AFTER_SECS: f32 = 60.0;

/// Whether snackbars hide themselves after the delay by default.
pub const DEFAULT_AUTO_DISMISS: bool = true;

/// Whether tapping the snackbar surface hides it by default.
pub const DEFAULT_DISMISS_ON_TAP: bool = true;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default extra space below the snackbar content (in pixels).
pub const DEFAULT_EXTRA_BOTTOM_PADDING: f32 = 0.0;

/// Maximum extra bottom padding accepted from the config file.
pub const MAX_EXTRA_BOTTOM_PADDING: f32 = 200.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DISMISS_AFTER_SECS > 0.0);
    assert!(MAX_DISMISS_AFTER_SECS >= MIN_DISMISS_AFTER_SECS);
    assert!(DEFAULT_DISMISS_AFTER_SECS >= MIN_DISMISS_AFTER_SECS);
    assert!(DEFAULT_DISMISS_AFTER_SECS <= MAX_DISMISS_AFTER_SECS);

    assert!(DEFAULT_EXTRA_BOTTOM_PADDING >= 0.0);
    assert!(MAX_EXTRA_BOTTOM_PADDING >= DEFAULT_EXTRA_BOTTOM_PADDING);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_defaults_are_valid() {
        assert_eq!(DEFAULT_DISMISS_AFTER_SECS, 4.0);
        assert!(DEFAULT_DISMISS_AFTER_SECS >= MIN_DISMISS_AFTER_SECS);
        assert!(DEFAULT_DISMISS_AFTER_SECS <= MAX_DISMISS_AFTER_SECS);
    }
}
