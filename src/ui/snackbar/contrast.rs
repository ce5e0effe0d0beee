// SPDX-License-Identifier: MPL-2.0
//! Foreground color selection for legible text on a snackbar background.
//!
//! Luminance is computed directly on the stored color components, without
//! gamma linearization.

use crate::ui::design_tokens::palette;
use iced::Color;

/// Luminance below which a background counts as dark.
pub const DARK_THRESHOLD: f32 = 0.5;

/// Returns the sRGB-weighted luminance of `color` in `0.0..=1.0`.
#[must_use]
pub fn relative_luminance(color: Color) -> f32 {
    0.2126 * color.r + 0.7152 * color.g + 0.0722 * color.b
}

/// Returns `true` if `color` is dark enough to need light text.
///
/// A luminance of exactly [`DARK_THRESHOLD`] is not dark.
#[must_use]
pub fn is_dark(color: Color) -> bool {
    relative_luminance(color) < DARK_THRESHOLD
}

/// Picks white or black text for `background`.
#[must_use]
pub fn text_color(background: Color) -> Color {
    if is_dark(background) {
        palette::WHITE
    } else {
        palette::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_background_gets_black_text() {
        assert_eq!(relative_luminance(Color::WHITE), 1.0);
        assert_eq!(text_color(Color::WHITE), Color::BLACK);
    }

    #[test]
    fn black_background_gets_white_text() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
        assert_eq!(text_color(Color::BLACK), Color::WHITE);
    }

    #[test]
    fn mid_gray_sits_on_the_light_side_of_the_threshold() {
        let gray = Color::from_rgb(0.5, 0.5, 0.5);
        assert!(!is_dark(gray));
        assert_eq!(text_color(gray), Color::BLACK);
    }

    #[test]
    fn green_weighs_more_than_red_and_blue() {
        let green = Color::from_rgb(0.0, 1.0, 0.0);
        let red = Color::from_rgb(1.0, 0.0, 0.0);
        let blue = Color::from_rgb(0.0, 0.0, 1.0);

        assert!(!is_dark(green));
        assert!(is_dark(red));
        assert!(is_dark(blue));
    }

    #[test]
    fn alpha_is_ignored() {
        let translucent = Color::from_rgba(1.0, 1.0, 1.0, 0.1);
        assert_eq!(text_color(translucent), Color::BLACK);
    }

    #[test]
    fn named_colors_resolve_to_expected_text() {
        // Red error background is dark, ochre warning background is light.
        assert_eq!(text_color(palette::ERROR_500), Color::WHITE);
        assert_eq!(text_color(palette::WARNING_500), Color::BLACK);
    }
}
