// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::radius;
use crate::ui::snackbar::contrast;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Snackbar surface filled with `background`.
///
/// Text inherits the contrast color, so title and body spans need no
/// explicit color of their own.
pub fn snackbar_surface(background: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(contrast::text_color(background)),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Plain panel behind the demo screen content.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
