// SPDX-License-Identifier: MPL-2.0
//! User interface components and state.
//!
//! - [`snackbar`] - Snackbar overlay, store, and lifecycle
//! - [`state`] - Value types shared with configuration
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, motion)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod snackbar;
pub mod state;
pub mod styles;
pub mod theming;
