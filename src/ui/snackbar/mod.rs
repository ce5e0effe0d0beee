// SPDX-License-Identifier: MPL-2.0
//! Dismissible snackbar notification overlay.
//!
//! A snackbar is a bar anchored to the bottom edge of the window, carrying a
//! title, an optional body line, and an optional action label. It slides in
//! when shown and hides itself after a delay, on tap, or when its action is
//! used.
//!
//! # Components
//!
//! - [`store`] - `Store` holding the current content and visibility, plus the
//!   cross-thread `Handle`
//! - [`presence`] - Visibility flag, auto-dismiss countdown, slide transition
//! - [`overlay`] - `Snackbar` view builder stacking the bar over host content
//! - [`content`] - Rich text, action callbacks, and the content record
//! - [`style`] - Background styles and named colors
//! - [`contrast`] - Text color selection against the background
//!
//! # Usage
//!
//! ```ignore
//! use iced_snackbar::ui::snackbar::{SnackbarStyle, Store};
//!
//! let mut store = Store::new();
//! store.display_plain("Image saved", None, SnackbarStyle::Default);
//!
//! // In your view function
//! store.view(screen, Message::Snackbar)
//! ```

pub mod content;
pub mod contrast;
pub mod overlay;
pub mod presence;
pub mod store;
pub mod style;

pub use content::{Callback, Content, RichText, Segment, Weight};
pub use overlay::Snackbar;
pub use presence::{Behavior, DismissReason, Event, Presence};
pub use store::{feed, Feed, Handle, Request, Store};
pub use style::{parse_hex, to_hex, NamedColors, SnackbarStyle};
