// SPDX-License-Identifier: MPL-2.0
//! Visibility state and lifecycle of a snackbar.
//!
//! [`Presence`] is the flag the overlay renders from. It also tracks the
//! auto-dismiss countdown and the slide transition, both driven by
//! [`Event::Tick`] messages from [`Presence::subscription`].
//!
//! Every call to [`Presence::show`] restarts the countdown, and hiding
//! clears it, so a countdown started for one notification never hides the
//! next one.

use super::content::Callback;
use crate::ui::design_tokens::motion;
use crate::ui::state::DismissDelay;
use iced::{time, Subscription};
use std::time::{Duration, Instant};

/// Dismiss behavior supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Behavior {
    /// Whether tapping the surface (outside the action) hides the snackbar.
    pub dismiss_on_tap: bool,
    /// Delay after which a shown snackbar hides itself; `None` keeps it up.
    ///
    /// Taken as given; only the config file clamps it (see [`DismissDelay`]).
    pub dismiss_after: Option<Duration>,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            dismiss_on_tap: true,
            dismiss_after: Some(DismissDelay::default().as_duration()),
        }
    }
}

impl Behavior {
    #[must_use]
    pub fn dismiss_on_tap(mut self, dismiss_on_tap: bool) -> Self {
        self.dismiss_on_tap = dismiss_on_tap;
        self
    }

    #[must_use]
    pub fn dismiss_after(mut self, delay: Option<Duration>) -> Self {
        self.dismiss_after = delay;
        self
    }

    /// Sets the delay in seconds. Negative or non-finite values disable it.
    #[must_use]
    pub fn dismiss_after_secs(self, secs: Option<f32>) -> Self {
        let delay = secs.and_then(|secs| {
            let delay = Duration::try_from_secs_f32(secs).ok();
            if delay.is_none() {
                log::warn!("invalid dismiss delay {secs}s; auto-dismiss disabled");
            }
            delay
        });
        self.dismiss_after(delay)
    }
}

/// Messages emitted by the overlay and its subscription.
#[derive(Debug, Clone)]
pub enum Event {
    /// The surface was tapped outside the action label.
    SurfaceTapped,
    /// The action label was tapped.
    ActionTapped(Callback),
    /// Periodic tick for the countdown and the slide.
    Tick(Instant),
}

/// Why a snackbar went from visible to hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Timeout,
    Tap,
    Action,
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    In,
    Out,
}

#[derive(Debug, Clone, Copy)]
struct Slide {
    direction: Direction,
    started_at: Instant,
}

/// Visibility flag plus countdown and slide bookkeeping.
#[derive(Debug, Clone)]
pub struct Presence {
    showing: bool,
    shown_at: Option<Instant>,
    slide: Option<Slide>,
    /// Latest time observed through `show`, `dismiss`, or a tick.
    now: Instant,
}

impl Default for Presence {
    fn default() -> Self {
        Self::new()
    }
}

impl Presence {
    #[must_use]
    pub fn new() -> Self {
        Self::at(Instant::now())
    }

    /// Creates a hidden presence whose clock starts at `now`.
    #[must_use]
    pub fn at(now: Instant) -> Self {
        Self {
            showing: false,
            shown_at: None,
            slide: None,
            now,
        }
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.showing
    }

    /// Shows the snackbar, restarting the countdown.
    ///
    /// Showing while already visible keeps the surface in place.
    pub fn show(&mut self, now: Instant) {
        self.advance(now);
        if !self.showing {
            self.start_slide(Direction::In);
            self.showing = true;
        }
        self.shown_at = Some(now);
    }

    /// Hides the snackbar. Returns `false` if it was already hidden.
    pub fn dismiss(&mut self, reason: DismissReason, now: Instant) -> bool {
        self.advance(now);
        if !self.showing {
            return false;
        }
        log::trace!("snackbar dismissed: {reason:?}");
        self.start_slide(Direction::Out);
        self.showing = false;
        self.shown_at = None;
        true
    }

    /// Sets the flag from outside the overlay.
    pub fn set_showing(&mut self, showing: bool, now: Instant) {
        if showing {
            self.show(now);
        } else {
            self.dismiss(DismissReason::External, now);
        }
    }

    /// Handles an overlay event. Returns the reason if it hid the snackbar.
    pub fn update(&mut self, event: Event, behavior: &Behavior) -> Option<DismissReason> {
        match event {
            Event::Tick(now) => self.tick(now, behavior.dismiss_after),
            Event::SurfaceTapped => {
                if behavior.dismiss_on_tap && self.dismiss(DismissReason::Tap, Instant::now()) {
                    Some(DismissReason::Tap)
                } else {
                    None
                }
            }
            Event::ActionTapped(handler) => {
                // Taps on a surface that is already sliding out are ignored.
                if !self.showing {
                    return None;
                }
                handler.invoke();
                self.dismiss(DismissReason::Action, Instant::now())
                    .then_some(DismissReason::Action)
            }
        }
    }

    /// Advances the clock, finishing slides and expiring the countdown.
    pub fn tick(&mut self, now: Instant, dismiss_after: Option<Duration>) -> Option<DismissReason> {
        self.advance(now);

        if self
            .slide
            .is_some_and(|slide| self.now.saturating_duration_since(slide.started_at) >= motion::SLIDE)
        {
            self.slide = None;
        }

        let expired = match (self.shown_at, dismiss_after) {
            (Some(shown_at), Some(after)) => self.now.saturating_duration_since(shown_at) >= after,
            _ => false,
        };

        if expired && self.dismiss(DismissReason::Timeout, now) {
            Some(DismissReason::Timeout)
        } else {
            None
        }
    }

    /// Fraction of the surface currently revealed, `0.0..=1.0`.
    #[must_use]
    pub fn reveal(&self) -> f32 {
        match self.slide {
            None => {
                if self.showing {
                    1.0
                } else {
                    0.0
                }
            }
            Some(slide) => {
                let elapsed = self.now.saturating_duration_since(slide.started_at);
                let eased = ease_out_cubic(elapsed.as_secs_f32() / motion::SLIDE.as_secs_f32());
                match slide.direction {
                    Direction::In => eased,
                    Direction::Out => 1.0 - eased,
                }
            }
        }
    }

    /// Returns `true` while the surface must be drawn.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.showing || self.reveal() > 0.0
    }

    /// Returns `true` while a slide is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }

    /// Ticks needed to drive the slide and the countdown.
    pub fn subscription(&self, behavior: &Behavior) -> Subscription<Event> {
        if self.is_animating() {
            time::every(motion::FRAME).map(Event::Tick)
        } else if self.showing && behavior.dismiss_after.is_some() {
            time::every(motion::COUNTDOWN).map(Event::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Starts a slide from the current reveal, so an interrupted slide
    /// reverses in place instead of jumping to the far end.
    fn start_slide(&mut self, direction: Direction) {
        let reveal = self.reveal();
        let covered = match direction {
            Direction::In => reveal,
            Direction::Out => 1.0 - reveal,
        };
        let elapsed = motion::SLIDE.mul_f32(ease_out_cubic_inverse(covered));

        self.slide = Some(Slide {
            direction,
            started_at: self.now.checked_sub(elapsed).unwrap_or(self.now),
        });
    }

    fn advance(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

fn ease_out_cubic_inverse(eased: f32) -> f32 {
    1.0 - (1.0 - eased.clamp(0.0, 1.0)).cbrt()
}
