// SPDX-License-Identifier: MPL-2.0
//! Snackbar content: rich text, action callbacks, and the content record.

use super::style::SnackbarStyle;
use std::fmt;
use std::ops::Add;
use std::sync::Arc;

/// Font weight of a text segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    #[default]
    Normal,
    Semibold,
    Bold,
}

/// A run of text sharing one emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub weight: Weight,
    pub italic: bool,
}

impl Segment {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: Weight::Normal,
            italic: false,
        }
    }
}

/// Text made of differently emphasized segments.
///
/// Segments are joined with `+`, so a single line can mix emphasis:
///
/// ```
/// use iced_snackbar::ui::snackbar::RichText;
///
/// let body = RichText::from("Moved ") + RichText::from("3 files").bold() + " to trash";
/// assert_eq!(body.to_plain(), "Moved 3 files to trash");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RichText {
    segments: Vec<Segment>,
}

impl RichText {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::plain(text)],
        }
    }

    /// Renders every segment bold.
    #[must_use]
    pub fn bold(self) -> Self {
        self.with_weight(Weight::Bold)
    }

    /// Renders every segment semibold.
    #[must_use]
    pub fn semibold(self) -> Self {
        self.with_weight(Weight::Semibold)
    }

    /// Renders every segment in italics.
    #[must_use]
    pub fn italic(mut self) -> Self {
        for segment in &mut self.segments {
            segment.italic = true;
        }
        self
    }

    /// Applies `weight` to segments still at normal weight.
    ///
    /// Segments that already carry emphasis keep it, so a semibold title
    /// does not flatten a bold word inside it.
    #[must_use]
    pub fn with_default_weight(mut self, weight: Weight) -> Self {
        for segment in &mut self.segments {
            if segment.weight == Weight::Normal {
                segment.weight = weight;
            }
        }
        self
    }

    fn with_weight(mut self, weight: Weight) -> Self {
        for segment in &mut self.segments {
            segment.weight = weight;
        }
        self
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.text.is_empty())
    }

    /// Returns the text with all emphasis stripped.
    #[must_use]
    pub fn to_plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl<T: Into<RichText>> Add<T> for RichText {
    type Output = RichText;

    fn add(mut self, rhs: T) -> Self::Output {
        self.segments.extend(rhs.into().segments);
        self
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

/// Zero-argument handler run when the action label is tapped.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn() + Send + Sync>);

impl Callback {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn invoke(&self) {
        (self.0)();
    }

    /// Returns `true` if both callbacks share the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Everything the overlay renders for one notification.
///
/// Replaced wholesale by each display request.
#[derive(Debug, Clone, Default)]
pub struct Content {
    pub title: RichText,
    pub body: Option<RichText>,
    pub style: SnackbarStyle,
    pub action_label: Option<String>,
    pub action_handler: Option<Callback>,
}

impl Content {
    #[must_use]
    pub fn new(title: impl Into<RichText>, body: Option<RichText>, style: SnackbarStyle) -> Self {
        Self {
            title: title.into(),
            body,
            style,
            action_label: None,
            action_handler: None,
        }
    }

    /// Content built from plain strings.
    #[must_use]
    pub fn plain(title: &str, body: Option<&str>, style: SnackbarStyle) -> Self {
        Self::new(title, body.map(RichText::from), style)
    }

    #[must_use]
    pub fn with_action(mut self, label: impl Into<String>, handler: Option<Callback>) -> Self {
        self.action_label = Some(label.into());
        self.action_handler = handler;
        self
    }

    /// Returns the action only when both its label and handler are set.
    #[must_use]
    pub fn action(&self) -> Option<(&str, &Callback)> {
        drawn_action(&self.action_label, &self.action_handler)
    }
}

/// The action the overlay draws: a label with nothing to run is left out.
pub(crate) fn drawn_action<'a>(
    label: &'a Option<String>,
    handler: &'a Option<Callback>,
) -> Option<(&'a str, &'a Callback)> {
    label.as_deref().zip(handler.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn concatenation_keeps_segment_emphasis() {
        let text = RichText::from("Hi I'm a ") + RichText::from("Bold").bold() + " Description!";

        let weights: Vec<Weight> = text.segments().iter().map(|s| s.weight).collect();
        assert_eq!(weights, vec![Weight::Normal, Weight::Bold, Weight::Normal]);
        assert_eq!(text.to_plain(), "Hi I'm a Bold Description!");
    }

    #[test]
    fn default_weight_preserves_existing_emphasis() {
        let title = (RichText::from("Saved ") + RichText::from("report.pdf").bold())
            .with_default_weight(Weight::Semibold);

        assert_eq!(title.segments()[0].weight, Weight::Semibold);
        assert_eq!(title.segments()[1].weight, Weight::Bold);
    }

    #[test]
    fn italic_applies_to_all_segments() {
        let text = (RichText::from("a") + "b").italic();
        assert!(text.segments().iter().all(|s| s.italic));
    }

    #[test]
    fn empty_rich_text_is_empty() {
        assert!(RichText::default().is_empty());
        assert!(RichText::from("").is_empty());
        assert!(!RichText::from("x").is_empty());
    }

    #[test]
    fn callback_invokes_closure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let callback = Callback::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        callback.invoke();
        callback.clone().invoke();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn action_requires_label_and_handler() {
        let handler = Callback::new(|| {});

        let neither = Content::plain("t", None, SnackbarStyle::Default);
        assert!(neither.action().is_none());

        let label_only = neither.clone().with_action("UNDO", None);
        assert!(label_only.action().is_none());

        let handler_only = Content {
            action_handler: Some(handler.clone()),
            ..Content::plain("t", None, SnackbarStyle::Default)
        };
        assert!(handler_only.action().is_none());

        let both = Content::plain("t", None, SnackbarStyle::Default).with_action("UNDO", Some(handler));
        assert_eq!(both.action().map(|(label, _)| label), Some("UNDO"));
    }

    #[test]
    fn plain_content_wraps_optional_body() {
        let without = Content::plain("Saved", None, SnackbarStyle::Warning);
        assert!(without.body.is_none());
        assert_eq!(without.title.to_plain(), "Saved");
        assert_eq!(without.style, SnackbarStyle::Warning);

        let with = Content::plain("Saved", Some("to disk"), SnackbarStyle::Default);
        assert_eq!(with.body.map(|b| b.to_plain()), Some("to disk".to_string()));
    }
}
