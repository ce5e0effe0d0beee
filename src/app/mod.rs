// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the snackbar overlay.
//!
//! The `App` struct owns the snackbar [`Store`], the [`Handle`] other tasks
//! use to post notifications, and the loaded configuration. Toggling the
//! dismiss options on screen writes them back to `settings.toml`.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Demo, Flags, Message};

use crate::config::{self, Config};
use crate::ui::design_tokens::palette;
use crate::ui::snackbar::{Callback, Feed, Handle, RichText, SnackbarStyle, Store};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Delay before the background demo posts its snackbar.
const BACKGROUND_DELAY: Duration = Duration::from_secs(2);

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    snackbar: Store,
    /// Set once the feed subscription connects.
    handle: Option<Handle>,
    theme_mode: ThemeMode,
    config: Config,
    /// Directory override for saving; `None` uses the resolved config dir.
    config_dir: Option<PathBuf>,
    /// Bumped by the undo action, which may run off the update loop.
    undo_count: Arc<AtomicUsize>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            snackbar: Store::new(),
            handle: None,
            theme_mode: ThemeMode::System,
            config: Config::default(),
            config_dir: None,
            undo_count: Arc::new(AtomicUsize::new(0)),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let app = Self::from_config(config, flags, config_warning);
        (app, Task::none())
    }

    fn from_config(config: Config, flags: Flags, config_warning: Option<String>) -> Self {
        let snackbar = Store::new()
            .with_behavior(config.behavior())
            .with_colors(config.named_colors())
            .with_extra_bottom_padding(config.extra_bottom_padding());

        let mut app = Self {
            snackbar,
            theme_mode: flags.theme.unwrap_or(config.general.theme_mode),
            config,
            ..Self::default()
        };

        if let Some(warning) = config_warning {
            app.snackbar.display_plain(
                &warning,
                Some("Using default settings"),
                SnackbarStyle::Warning,
            );
        }

        app
    }

    fn title(&self) -> String {
        "Iced Snackbar".to_string()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_feed_subscription(),
            subscription::create_snackbar_subscription(&self.snackbar),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Feed(Feed::Connected(handle)) => {
                log::debug!("snackbar handle connected");
                self.handle = Some(handle);
            }
            Message::Feed(Feed::Request(request)) => self.snackbar.apply(request),
            Message::Snackbar(event) => {
                self.snackbar.update(event);
            }
            Message::Show(demo) => self.show_demo(demo),
            Message::ShowFromBackground => {
                if let Some(handle) = self.handle.clone() {
                    return Task::perform(
                        async move {
                            tokio::time::sleep(BACKGROUND_DELAY).await;
                            handle.display(
                                RichText::new("Sync finished"),
                                Some(RichText::new("Posted from a background task").italic()),
                                SnackbarStyle::Default,
                            )
                        },
                        Message::BackgroundFinished,
                    );
                }
            }
            Message::BackgroundFinished(Err(err)) => {
                log::warn!("background snackbar was not delivered: {err}");
            }
            Message::BackgroundFinished(Ok(())) => {}
            Message::Hide => self.snackbar.set_showing(false),
            Message::ToggleDismissOnTap(enabled) => {
                self.config.snackbar.dismiss_on_tap = Some(enabled);
                self.apply_behavior();
            }
            Message::ToggleAutoDismiss(enabled) => {
                self.config.snackbar.auto_dismiss = Some(enabled);
                self.apply_behavior();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            store: &self.snackbar,
            undo_count: self.undo_count.load(Ordering::Relaxed),
            can_post_from_background: self.handle.is_some(),
        })
    }

    fn show_demo(&mut self, demo: Demo) {
        match demo {
            Demo::Info => {
                self.snackbar
                    .display_plain("Image saved", None, SnackbarStyle::Default);
            }
            Demo::Warning => self.snackbar.display_plain(
                "Low disk space",
                Some("Less than 1 GB left on this volume"),
                SnackbarStyle::Warning,
            ),
            Demo::Error => self.snackbar.display_plain(
                "Upload failed",
                Some("The server did not respond"),
                SnackbarStyle::Error,
            ),
            Demo::Custom => self.snackbar.display_plain(
                "Custom background",
                Some("Text color follows the background brightness"),
                SnackbarStyle::Custom(palette::GRAY_100),
            ),
            Demo::Rich => self.snackbar.display(
                RichText::new("Moved ") + RichText::new("report.pdf").bold() + " to Archive",
                Some(RichText::new("You can find it under ") + RichText::new("Archive/2026").italic()),
                SnackbarStyle::Default,
            ),
            Demo::Undo => {
                let handler = self.undo_handler();
                self.snackbar.display_with_action(
                    RichText::new("Item deleted"),
                    None,
                    SnackbarStyle::Default,
                    "Undo",
                    Some(handler),
                );
            }
        }
    }

    /// Restores the item and confirms through the handle, since the callback
    /// has no access to the store.
    fn undo_handler(&self) -> Callback {
        let counter = Arc::clone(&self.undo_count);
        let handle = self.handle.clone();

        Callback::new(move || {
            counter.fetch_add(1, Ordering::Relaxed);
            if let Some(handle) = &handle {
                let confirmed =
                    handle.display_plain("Item restored", None, SnackbarStyle::Default);
                if let Err(err) = confirmed {
                    log::warn!("undo confirmation was not delivered: {err}");
                }
            }
        })
    }

    fn apply_behavior(&mut self) {
        self.snackbar.set_behavior(self.config.behavior());

        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            log::warn!("failed to save settings: {err}");
            self.snackbar.display_plain(
                "Settings not saved",
                Some(&err.to_string()),
                SnackbarStyle::Error,
            );
        }
    }
}
