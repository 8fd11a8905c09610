//! Notification events: the values handed to handlers at dispatch time.
//!
//! ## Contents
//! - [`Payload`] — the three payload shapes carried across channels
//! - [`Event`] — per-dispatch value: sequence number, timestamp, channel
//!   name, payload
//!
//! Events are constructed fresh by [`Channel::dispatch`](crate::Channel::dispatch)
//! and handed to every registered handler by reference.

mod event;
mod payload;

pub use event::Event;
pub use payload::Payload;
