// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Primary button used by the demo screen.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: opacity::OVERLAY_PRESSED,
            ..palette::PRIMARY_500
        },
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active | button::Status::Pressed => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Flat action label sitting on the snackbar surface.
///
/// `text_color` is the contrast color picked for the surface, reused as a
/// faint highlight behind the label on hover and press.
pub fn snackbar_action(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let highlight = match status {
            button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE / 2.0),
            button::Status::Pressed => Some(opacity::OVERLAY_SUBTLE),
            button::Status::Active | button::Status::Disabled => None,
        };

        button::Style {
            background: highlight.map(|a| Background::Color(Color { a, ..text_color })),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snackbar_action_keeps_text_color_in_every_state() {
        let style = snackbar_action(Color::WHITE);
        for status in [
            button::Status::Active,
            button::Status::Hovered,
            button::Status::Pressed,
            button::Status::Disabled,
        ] {
            assert_eq!(style(&Theme::Dark, status).text_color, Color::WHITE);
        }
    }

    #[test]
    fn snackbar_action_is_flat_until_hovered() {
        let style = snackbar_action(Color::BLACK);
        assert!(style(&Theme::Light, button::Status::Active).background.is_none());
        assert!(style(&Theme::Light, button::Status::Hovered).background.is_some());
    }
}
