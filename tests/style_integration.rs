// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_snackbar::ui::design_tokens::{motion, opacity, palette, snackbar, spacing};
    use iced_snackbar::ui::snackbar::contrast;
    use iced_snackbar::ui::snackbar::{NamedColors, SnackbarStyle};
    use iced_snackbar::ui::styles::{button, container};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let action = button::snackbar_action(palette::WHITE);
        let _ = action(&theme, iced::widget::button::Status::Hovered);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_SUBTLE;
        let _ = motion::SLIDE;

        assert_eq!(snackbar::PADDING_TOP, 16.0);
        assert_eq!(snackbar::PADDING_HORIZONTAL, 24.0);
        assert_eq!(snackbar::PADDING_BOTTOM, 32.0);
    }

    #[test]
    fn named_style_surfaces_pick_readable_text() {
        let colors = NamedColors::default();

        for theme in [Theme::Light, Theme::Dark] {
            for style in [
                SnackbarStyle::Default,
                SnackbarStyle::Warning,
                SnackbarStyle::Error,
                SnackbarStyle::Custom(palette::BLACK),
            ] {
                let background = style.background(&colors, &theme);
                let surface = container::snackbar_surface(background);
                assert_eq!(surface.text_color, Some(contrast::text_color(background)));
            }
        }
    }

    #[test]
    fn warning_takes_dark_text_and_error_takes_light_text() {
        let colors = NamedColors::default();
        let theme = Theme::Light;

        assert_eq!(
            contrast::text_color(SnackbarStyle::Warning.background(&colors, &theme)),
            palette::BLACK
        );
        assert_eq!(
            contrast::text_color(SnackbarStyle::Error.background(&colors, &theme)),
            palette::WHITE
        );
    }
}
