// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::error::Error;
use crate::ui::snackbar::{Event, Feed};
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Handle connection and requests coming from other tasks.
    Feed(Feed),
    /// Taps and ticks from the snackbar overlay.
    Snackbar(Event),
    /// A demo button was pressed.
    Show(Demo),
    /// Ask a background task to post a snackbar after a short wait.
    ShowFromBackground,
    BackgroundFinished(Result<(), Error>),
    Hide,
    ToggleDismissOnTap(bool),
    ToggleAutoDismiss(bool),
}

/// Canned notifications offered by the demo screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Info,
    Warning,
    Error,
    Custom,
    Rich,
    Undo,
}

impl Demo {
    pub const ALL: [Demo; 6] = [
        Demo::Info,
        Demo::Warning,
        Demo::Error,
        Demo::Custom,
        Demo::Rich,
        Demo::Undo,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Demo::Info => "Info",
            Demo::Warning => "Warning",
            Demo::Error => "Error",
            Demo::Custom => "Custom color",
            Demo::Rich => "Rich text",
            Demo::Undo => "Delete (with undo)",
        }
    }
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Overrides the theme mode stored in the config file.
    pub theme: Option<ThemeMode>,
}
