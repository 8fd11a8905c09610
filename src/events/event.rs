//! # Notification event.
//!
//! An [`Event`] is built fresh for every dispatch and handed to each
//! registered handler by reference. Besides the [`Payload`], it carries a
//! globally unique sequence number (`seq`) and a wall-clock timestamp (`at`)
//! so handlers can order and log what they saw.
//!
//! ## Ordering guarantees
//! `seq` increases monotonically across all channels in the process. Two
//! events dispatched one after another always compare `seq` in dispatch
//! order, even when their channels differ.
//!
//! ## Example
//! ```rust
//! use eventcast::{Event, Payload};
//!
//! let ev = Event::new("status", Payload::message("ready"));
//! assert_eq!(ev.channel.as_ref(), "status");
//! assert_eq!(ev.payload.text(), Some("ready"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

use super::payload::Payload;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// A single notification, as seen by handlers.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - `channel`: name of the channel that dispatched this event
/// - `payload`: event-specific data
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Name of the dispatching channel.
    pub channel: Arc<str>,
    /// Event-specific data.
    pub payload: Payload,
}

impl Event {
    /// Creates a new event with the current timestamp and next sequence number.
    pub fn new(channel: impl Into<Arc<str>>, payload: Payload) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            channel: channel.into(),
            payload,
        }
    }

    /// True if this event was dispatched on the named channel.
    #[inline]
    pub fn is_on(&self, channel: &str) -> bool {
        self.channel.as_ref() == channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Event::new("alpha", Payload::Empty);
        let b = Event::new("alpha", Payload::Empty);
        let c = Event::new("beta", Payload::message("x"));
        assert!(a.seq < b.seq);
        assert!(b.seq < c.seq);
    }

    #[test]
    fn test_channel_match() {
        let ev = Event::new("status", Payload::Empty);
        assert!(ev.is_on("status"));
        assert!(!ev.is_on("report"));
    }
}
