//! # Event payloads.
//!
//! Three shapes cover everything the channels carry:
//! - [`Payload::Empty`] — the fact that the event fired is the information;
//! - [`Payload::Message`] — a single message string;
//! - [`Payload::Report`] — two related strings describing one logical event.
//!
//! Payloads are immutable value objects. Fields are `Arc<str>`, so cloning a
//! payload (or the event that carries it) is cheap; a fresh payload is built
//! for every dispatch.
//!
//! ## Example
//! ```rust
//! use eventcast::Payload;
//!
//! let p = Payload::message("ready");
//! assert_eq!(p.text(), Some("ready"));
//! assert!(!p.is_empty());
//!
//! let r = Payload::report("stage one done", "all probes nominal");
//! assert_eq!(r.summary(), Some("stage one done"));
//! assert_eq!(r.detail(), Some("all probes nominal"));
//! ```

use std::sync::Arc;

/// Data carried by an [`Event`](crate::Event).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    /// No data beyond the event having fired.
    Empty,

    /// A single message string.
    Message {
        /// The message text.
        text: Arc<str>,
    },

    /// Two related strings for the same logical event.
    Report {
        /// Primary data.
        summary: Arc<str>,
        /// Secondary data.
        detail: Arc<str>,
    },
}

impl Payload {
    /// Builds a [`Payload::Message`].
    pub fn message(text: impl Into<Arc<str>>) -> Self {
        Payload::Message { text: text.into() }
    }

    /// Builds a [`Payload::Report`].
    pub fn report(summary: impl Into<Arc<str>>, detail: impl Into<Arc<str>>) -> Self {
        Payload::Report {
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Returns the message text, if this is a [`Payload::Message`].
    pub fn text(&self) -> Option<&str> {
        match self {
            Payload::Message { text } => Some(text),
            _ => None,
        }
    }

    /// Returns the primary data, if this is a [`Payload::Report`].
    pub fn summary(&self) -> Option<&str> {
        match self {
            Payload::Report { summary, .. } => Some(summary),
            _ => None,
        }
    }

    /// Returns the secondary data, if this is a [`Payload::Report`].
    pub fn detail(&self) -> Option<&str> {
        match self {
            Payload::Report { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// True for [`Payload::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_accessor() {
        let p = Payload::message("hello");
        assert_eq!(p.text(), Some("hello"));
        assert_eq!(p.summary(), None);
        assert_eq!(p.detail(), None);
        assert!(!p.is_empty());
    }

    #[test]
    fn test_report_accessors() {
        let p = Payload::report("primary", "secondary");
        assert_eq!(p.summary(), Some("primary"));
        assert_eq!(p.detail(), Some("secondary"));
        assert_eq!(p.text(), None);
    }

    #[test]
    fn test_empty_has_no_data() {
        let p = Payload::Empty;
        assert!(p.is_empty());
        assert_eq!(p.text(), None);
        assert_eq!(p.summary(), None);
        assert_eq!(p.detail(), None);
    }
}
