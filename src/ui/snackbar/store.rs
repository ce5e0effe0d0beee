// SPDX-License-Identifier: MPL-2.0
//! Single entry point through which application code requests a snackbar.
//!
//! [`Store`] lives in the application state and is mutated from the update
//! loop. Code running on other threads or tasks uses a [`Handle`] instead:
//! each display call packs the whole [`Content`] into one [`Request`], so
//! the store never renders a half-applied notification.
//!
//! ```ignore
//! // In App::subscription
//! Subscription::batch([
//!     snackbar::feed().map(Message::Feed),
//!     self.snackbar.subscription().map(Message::Snackbar),
//! ])
//!
//! // In App::update
//! Message::Feed(Feed::Connected(handle)) => self.handle = Some(handle),
//! Message::Feed(Feed::Request(request)) => self.snackbar.apply(request),
//! Message::Snackbar(event) => { self.snackbar.update(event); }
//! ```

use super::content::{Callback, Content, RichText};
use super::overlay::Snackbar;
use super::presence::{Behavior, DismissReason, Event, Presence};
use super::style::{NamedColors, SnackbarStyle};
use crate::error::{Error, Result};
use iced::futures::channel::mpsc::Sender;
use iced::futures::{SinkExt, Stream};
use iced::{stream, Element, Subscription};
use std::time::Instant;
use tokio::sync::mpsc;

/// A mutation sent from a [`Handle`] to the store.
#[derive(Debug, Clone)]
pub enum Request {
    /// Replace the content and show it.
    Display(Box<Content>),
    /// Hide the snackbar.
    Hide,
}

/// Messages produced by [`feed`].
#[derive(Debug, Clone)]
pub enum Feed {
    /// The channel is up; keep this handle to send requests.
    Connected(Handle),
    /// A request to apply with [`Store::apply`].
    Request(Request),
}

/// Cloneable sender usable from any thread or task.
#[derive(Debug, Clone)]
pub struct Handle {
    sender: mpsc::UnboundedSender<Request>,
}

impl Handle {
    /// Creates a handle and the receiver its requests arrive on.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Request>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Requests a snackbar built from plain strings.
    pub fn display_plain(&self, title: &str, body: Option<&str>, style: SnackbarStyle) -> Result<()> {
        self.send(Request::Display(Box::new(Content::plain(title, body, style))))
    }

    /// Requests a snackbar built from rich text.
    pub fn display(&self, title: RichText, body: Option<RichText>, style: SnackbarStyle) -> Result<()> {
        self.send(Request::Display(Box::new(Content::new(title, body, style))))
    }

    /// Requests a snackbar with an action label.
    pub fn display_with_action(
        &self,
        title: RichText,
        body: Option<RichText>,
        style: SnackbarStyle,
        action_label: impl Into<String>,
        action_handler: Option<Callback>,
    ) -> Result<()> {
        let content = Content::new(title, body, style).with_action(action_label, action_handler);
        self.send(Request::Display(Box::new(content)))
    }

    /// Requests the snackbar to hide.
    pub fn hide(&self) -> Result<()> {
        self.send(Request::Hide)
    }

    fn send(&self, request: Request) -> Result<()> {
        self.sender
            .send(request)
            .map_err(|_| Error::StoreDisconnected)
    }
}

/// Subscription bridging [`Handle`]s into the update loop.
///
/// Emits [`Feed::Connected`] once, then one [`Feed::Request`] per request.
pub fn feed() -> Subscription<Feed> {
    Subscription::run(feed_stream)
}

fn feed_stream() -> impl Stream<Item = Feed> {
    stream::channel(100, |mut output: Sender<Feed>| async move {
        let (handle, mut receiver) = Handle::channel();

        if output.send(Feed::Connected(handle)).await.is_err() {
            return;
        }

        while let Some(request) = receiver.recv().await {
            if output.send(Feed::Request(request)).await.is_err() {
                break;
            }
        }

        log::debug!("snackbar feed closed");
    })
}

/// Content, visibility, and dismiss settings for one snackbar.
#[derive(Debug, Default)]
pub struct Store {
    content: Content,
    presence: Presence,
    behavior: Behavior,
    colors: NamedColors,
    extra_bottom_padding: f32,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: NamedColors) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_extra_bottom_padding(mut self, padding: f32) -> Self {
        self.extra_bottom_padding = padding.max(0.0);
        self
    }

    pub fn set_behavior(&mut self, behavior: Behavior) {
        self.behavior = behavior;
    }

    pub fn set_colors(&mut self, colors: NamedColors) {
        self.colors = colors;
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn presence(&self) -> &Presence {
        &self.presence
    }

    #[must_use]
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    #[must_use]
    pub fn colors(&self) -> NamedColors {
        self.colors
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.presence.is_showing()
    }

    /// Shows a snackbar built from plain strings, clearing any action.
    pub fn display_plain(&mut self, title: &str, body: Option<&str>, style: SnackbarStyle) {
        self.replace(Content::plain(title, body, style), Instant::now());
    }

    /// Shows a snackbar built from rich text, clearing any action.
    pub fn display(&mut self, title: RichText, body: Option<RichText>, style: SnackbarStyle) {
        self.replace(Content::new(title, body, style), Instant::now());
    }

    /// Shows a snackbar with an action label.
    pub fn display_with_action(
        &mut self,
        title: RichText,
        body: Option<RichText>,
        style: SnackbarStyle,
        action_label: impl Into<String>,
        action_handler: Option<Callback>,
    ) {
        let content = Content::new(title, body, style).with_action(action_label, action_handler);
        self.replace(content, Instant::now());
    }

    /// Applies a request received through [`feed`].
    pub fn apply(&mut self, request: Request) {
        match request {
            Request::Display(content) => self.replace(*content, Instant::now()),
            Request::Hide => self.set_showing(false),
        }
    }

    /// Sets the visibility flag from outside the overlay.
    pub fn set_showing(&mut self, showing: bool) {
        self.presence.set_showing(showing, Instant::now());
    }

    /// Handles an overlay event.
    pub fn update(&mut self, event: Event) -> Option<DismissReason> {
        self.presence.update(event, &self.behavior)
    }

    pub fn subscription(&self) -> Subscription<Event> {
        self.presence.subscription(&self.behavior)
    }

    /// Draws the snackbar over `host`.
    pub fn view<'a, Message: 'a>(
        &'a self,
        host: impl Into<Element<'a, Message>>,
        on_event: impl Fn(Event) -> Message + 'a,
    ) -> Element<'a, Message> {
        let mut snackbar = Snackbar::new(host, &self.presence, self.content.title.clone(), on_event)
            .body_maybe(self.content.body.clone())
            .style(self.content.style)
            .colors(self.colors)
            .extra_bottom_padding(self.extra_bottom_padding);

        if let Some(label) = &self.content.action_label {
            snackbar = snackbar.action(label.clone(), self.content.action_handler.clone());
        }

        snackbar.into()
    }

    fn replace(&mut self, content: Content, now: Instant) {
        log::debug!(
            "snackbar display: {:?} ({:?}, action: {})",
            content.title.to_plain(),
            content.style,
            content.action().is_some()
        );
        self.content = content;
        self.presence.show(now);
    }
}
