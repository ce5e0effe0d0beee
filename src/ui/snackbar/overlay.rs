// SPDX-License-Identifier: MPL-2.0
//! Overlay that draws a snackbar over arbitrary host content.
//!
//! The host always renders at full bounds; the snackbar surface is stacked
//! on top, anchored to the bottom edge, and revealed from its top while the
//! [`Presence`] slides in or out.

use super::content::{drawn_action, Callback, RichText, Segment, Weight};
use super::presence::{Event, Presence};
use super::style::{NamedColors, SnackbarStyle};
use crate::ui::design_tokens::{snackbar as tokens, spacing, typography};
use crate::ui::snackbar::contrast;
use crate::ui::styles;
use iced::widget::text::Span;
use iced::widget::{button, mouse_area, rich_text, span, text, Column, Container, Row, Stack};
use iced::{alignment, font, Element, Font, Length, Padding, Theme};

/// Builder composing host content with a snackbar.
///
/// ```ignore
/// Snackbar::new(screen, &self.presence, "Saved", Message::Snackbar)
///     .body(RichText::from("3 files"))
///     .style(SnackbarStyle::Warning)
///     .action("Undo", Some(undo))
///     .into()
/// ```
pub struct Snackbar<'a, Message> {
    host: Element<'a, Message>,
    presence: &'a Presence,
    title: RichText,
    body: Option<RichText>,
    style: SnackbarStyle,
    colors: NamedColors,
    action_label: Option<String>,
    action_handler: Option<Callback>,
    extra_bottom_padding: f32,
    on_event: Box<dyn Fn(Event) -> Message + 'a>,
}

impl<'a, Message: 'a> Snackbar<'a, Message> {
    pub fn new(
        host: impl Into<Element<'a, Message>>,
        presence: &'a Presence,
        title: impl Into<RichText>,
        on_event: impl Fn(Event) -> Message + 'a,
    ) -> Self {
        Self {
            host: host.into(),
            presence,
            title: title.into(),
            body: None,
            style: SnackbarStyle::default(),
            colors: NamedColors::default(),
            action_label: None,
            action_handler: None,
            extra_bottom_padding: 0.0,
            on_event: Box::new(on_event),
        }
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<RichText>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn body_maybe(mut self, body: Option<RichText>) -> Self {
        self.body = body;
        self
    }

    #[must_use]
    pub fn style(mut self, style: SnackbarStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn colors(mut self, colors: NamedColors) -> Self {
        self.colors = colors;
        self
    }

    /// Sets the action. The label is only drawn when a handler is present.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, handler: Option<Callback>) -> Self {
        self.action_label = Some(label.into());
        self.action_handler = handler;
        self
    }

    #[must_use]
    pub fn extra_bottom_padding(mut self, padding: f32) -> Self {
        self.extra_bottom_padding = padding.max(0.0);
        self
    }

    fn drawn_action(&self) -> Option<(&str, &Callback)> {
        drawn_action(&self.action_label, &self.action_handler)
    }

    fn surface(&self) -> Element<'a, Event> {
        let style = self.style;
        let colors = self.colors;

        let mut lines = Column::new()
            .spacing(tokens::LINE_SPACING)
            .push(rich(&self.title.clone().with_default_weight(Weight::Semibold)));
        if let Some(body) = &self.body {
            lines = lines.push(rich(body));
        }

        let mut row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(lines).width(Length::Fill));

        if let Some((label, handler)) = self.drawn_action() {
            let label = text(label.to_uppercase())
                .size(typography::BODY_LG)
                .font(Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                });
            let action = button(label)
                .padding(spacing::XXS)
                .on_press(Event::ActionTapped(handler.clone()))
                .style(move |theme: &Theme, status| {
                    let foreground = contrast::text_color(style.background(&colors, theme));
                    styles::button::snackbar_action(foreground)(theme, status)
                });
            row = row.push(action);
        }

        let surface = Container::new(row)
            .width(Length::Fill)
            .padding(surface_padding(self.extra_bottom_padding))
            .style(move |theme: &Theme| {
                styles::container::snackbar_surface(style.background(&colors, theme))
            });

        let mut revealed = Container::new(mouse_area(surface).on_press(Event::SurfaceTapped))
            .width(Length::Fill)
            .align_y(alignment::Vertical::Top)
            .clip(true);
        if let Some(limit) = reveal_limit(self.presence.reveal()) {
            revealed = revealed.max_height(limit);
        }

        Container::new(revealed)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Bottom)
            .into()
    }
}

impl<'a, Message: 'a> From<Snackbar<'a, Message>> for Element<'a, Message> {
    fn from(snackbar: Snackbar<'a, Message>) -> Self {
        // The host stays the first stack child so its widget state survives
        // the surface appearing and disappearing.
        let mut stack = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill);

        let surface = snackbar.presence.is_rendered().then(|| snackbar.surface());
        let Snackbar { host, on_event, .. } = snackbar;
        stack = stack.push(host);

        if let Some(surface) = surface {
            stack = stack.push(surface.map(move |event| on_event(event)));
        }

        stack.into()
    }
}

/// Height cap while the surface slides; a settled surface is never clipped.
fn reveal_limit(reveal: f32) -> Option<f32> {
    (reveal < 1.0).then(|| reveal.max(0.0) * tokens::MAX_HEIGHT)
}

/// Padding around the surface content: 16 top, 24 on the
/// sides, 32 plus the caller's extra space at the bottom.
#[must_use]
pub fn surface_padding(extra_bottom: f32) -> Padding {
    Padding {
        top: tokens::PADDING_TOP,
        right: tokens::PADDING_HORIZONTAL,
        bottom: tokens::PADDING_BOTTOM + extra_bottom.max(0.0),
        left: tokens::PADDING_HORIZONTAL,
    }
}

fn segment_font(segment: &Segment) -> Font {
    let weight = match segment.weight {
        Weight::Normal => font::Weight::Normal,
        Weight::Semibold => font::Weight::Semibold,
        Weight::Bold => font::Weight::Bold,
    };
    let style = if segment.italic {
        font::Style::Italic
    } else {
        font::Style::Normal
    };

    Font {
        weight,
        style,
        ..Font::DEFAULT
    }
}

fn rich<'a>(text: &RichText) -> Element<'a, Event> {
    let spans: Vec<Span<'a, (), Font>> = text
        .segments()
        .iter()
        .map(|segment| span::<(), _>(segment.text.clone()).font(segment_font(segment)))
        .collect();

    rich_text(spans).size(typography::BODY_LG).into()
}
