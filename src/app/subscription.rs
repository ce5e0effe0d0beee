// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::snackbar::{self, Store};
use iced::Subscription;

/// Bridges [`snackbar::Handle`] requests into the update loop.
pub fn create_feed_subscription() -> Subscription<Message> {
    snackbar::feed().map(Message::Feed)
}

/// Countdown and slide ticks, active only while the snackbar needs them.
pub fn create_snackbar_subscription(store: &Store) -> Subscription<Message> {
    store.subscription().map(Message::Snackbar)
}
