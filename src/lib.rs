// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` is a dismissible snackbar notification overlay for the Iced
//! GUI framework.
//!
//! It provides a bottom-anchored bar with rich title and body text, style-based
//! background colors with automatic text contrast, an optional action label,
//! and a store that application code (or background tasks, through a handle)
//! uses to show and hide it.

#![doc(html_root_url = "https://docs.rs/iced_snackbar/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
