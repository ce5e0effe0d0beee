// SPDX-License-Identifier: MPL-2.0
//! Snackbar background styles and the named colors they resolve against.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};

/// Specifies the snackbar's background color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SnackbarStyle {
    /// The theme's accent color.
    #[default]
    Default,
    /// The named warning color (ochre unless configured).
    Warning,
    /// The named error color (red unless configured).
    Error,
    /// A caller-supplied color.
    Custom(Color),
}

impl SnackbarStyle {
    /// Resolves the background color for this style.
    #[must_use]
    pub fn background(&self, colors: &NamedColors, theme: &Theme) -> Color {
        match self {
            SnackbarStyle::Default => colors.accent.unwrap_or(theme.palette().primary),
            SnackbarStyle::Warning => colors.warning,
            SnackbarStyle::Error => colors.error,
            SnackbarStyle::Custom(color) => *color,
        }
    }
}

/// Color catalog backing the non-custom styles.
///
/// `accent` stays `None` to follow the active theme's primary color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedColors {
    pub accent: Option<Color>,
    pub warning: Color,
    pub error: Color,
}

impl Default for NamedColors {
    fn default() -> Self {
        Self {
            accent: None,
            warning: palette::WARNING_500,
            error: palette::ERROR_500,
        }
    }
}

/// Parses a `#RRGGBB` or `#RRGGBBAA` hex string (leading `#` optional).
#[must_use]
pub fn parse_hex(raw: &str) -> Option<Color> {
    let hex = raw.trim().trim_start_matches('#');
    if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if hex.len() == 8 { channel(6)? } else { 255 };

    Some(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}

/// Formats a color as `#RRGGBB`, dropping alpha.
#[must_use]
pub fn to_hex(color: Color) -> String {
    let [r, g, b, _] = color.into_rgba8();
    format!("#{r:02X}{g:02X}{b:02X}")
}
