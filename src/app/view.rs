// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo screen.
//!
//! The screen is a column of buttons that trigger each kind of snackbar,
//! with the snackbar overlay stacked on top by [`Store::view`].

use super::message::Demo;
use super::Message;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::snackbar::Store;
use crate::ui::styles;
use iced::widget::{button, checkbox, text, Column, Container, Row};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub store: &'a Store,
    pub undo_count: usize,
    /// Whether a handle is connected, enabling the background demo.
    pub can_post_from_background: bool,
}

/// Renders the demo screen with the snackbar overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let behavior = ctx.store.behavior();

    let demos = Demo::ALL
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, demo| {
            column.push(demo_button(demo.label(), Some(Message::Show(*demo))))
        });

    let background = demo_button(
        "From background task",
        ctx.can_post_from_background
            .then_some(Message::ShowFromBackground),
    );
    let hide = demo_button("Hide", ctx.store.is_showing().then_some(Message::Hide));

    let toggles = Row::new()
        .spacing(spacing::LG)
        .push(
            checkbox(behavior.dismiss_on_tap)
                .label("Dismiss on tap")
                .on_toggle(Message::ToggleDismissOnTap),
        )
        .push(
            checkbox(behavior.dismiss_after.is_some())
                .label("Auto dismiss")
                .on_toggle(Message::ToggleAutoDismiss),
        );

    let panel = Column::new()
        .spacing(spacing::MD)
        .align_x(Alignment::Center)
        .push(text("Snackbar demo").size(typography::TITLE_MD))
        .push(demos)
        .push(Row::new().spacing(spacing::XS).push(background).push(hide))
        .push(toggles)
        .push(text(format!("Items restored: {}", ctx.undo_count)).size(typography::BODY));

    let screen = Container::new(
        Container::new(panel)
            .padding(spacing::LG)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill);

    ctx.store.view(screen, Message::Snackbar)
}

fn demo_button(label: &str, on_press: Option<Message>) -> Element<'_, Message> {
    button(text(label).size(typography::BODY))
        .width(Length::Fixed(220.0))
        .on_press_maybe(on_press)
        .style(styles::button::primary)
        .into()
}
