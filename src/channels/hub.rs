//! # Hub: named collection of channels.
//!
//! A [`Hub`] owns the channels a publisher exposes. Channels are created
//! once (idempotently) and never destroyed; only their handler lists change.
//! Insertion order is preserved, so channels are addressable by name or by
//! position in [`Hub::names`].
//!
//! The by-name convenience operations resolve a channel and forward to it;
//! the only failure is addressing a channel that does not exist
//! ([`HubError::UnknownChannel`]). Callers that keep the `Arc<Channel>`
//! returned by [`Hub::add`] or [`Hub::channel`] skip the lookup entirely.
//!
//! ## Example
//! ```rust
//! use eventcast::{Event, Hub, HandlerFn};
//!
//! let hub = Hub::new();
//! hub.add("status");
//!
//! let sub = hub
//!     .register("status", HandlerFn::arc("probe", |_ev: Event| async {}))
//!     .unwrap();
//! assert!(hub.deregister("status", sub).unwrap());
//!
//! assert!(hub.register("nope", HandlerFn::arc("probe", |_ev: Event| async {})).is_err());
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::channel::{Channel, Subscription};
use super::handler::HandlerRef;
use crate::error::HubError;
use crate::events::Payload;

/// Insertion-ordered set of named channels.
#[derive(Debug, Default)]
pub struct Hub {
    channels: Mutex<Vec<Arc<Channel>>>,
}

impl Hub {
    /// Creates an empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the channel with the given name, creating it if needed.
    ///
    /// Idempotent: adding an existing name returns the existing channel.
    pub fn add(&self, name: &str) -> Arc<Channel> {
        let mut channels = self.lock_channels();
        if let Some(ch) = channels.iter().find(|c| c.name() == name) {
            return Arc::clone(ch);
        }
        let ch = Arc::new(Channel::new(name));
        channels.push(Arc::clone(&ch));
        ch
    }

    /// Looks up a channel by name.
    pub fn channel(&self, name: &str) -> Option<Arc<Channel>> {
        self.lock_channels()
            .iter()
            .find(|c| c.name() == name)
            .map(Arc::clone)
    }

    /// Registers a handler on the named channel.
    pub fn register(&self, name: &str, handler: HandlerRef) -> Result<Subscription, HubError> {
        Ok(self.resolve(name)?.register(handler))
    }

    /// Deregisters a token from the named channel.
    ///
    /// `Ok(false)` when the token was not present (a no-op, mirroring
    /// [`Channel::deregister`]); `Err` only when the channel itself is
    /// unknown.
    pub fn deregister(&self, name: &str, sub: Subscription) -> Result<bool, HubError> {
        Ok(self.resolve(name)?.deregister(sub))
    }

    /// Dispatches a payload on the named channel.
    pub async fn dispatch(&self, name: &str, payload: Payload) -> Result<(), HubError> {
        let channel = self.resolve(name)?;
        channel.dispatch(payload).await;
        Ok(())
    }

    /// Channel names, in creation order.
    pub fn names(&self) -> Vec<Arc<str>> {
        self.lock_channels()
            .iter()
            .map(|c| Arc::from(c.name()))
            .collect()
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.lock_channels().len()
    }

    /// True if the hub has no channels.
    pub fn is_empty(&self) -> bool {
        self.lock_channels().is_empty()
    }

    fn resolve(&self, name: &str) -> Result<Arc<Channel>, HubError> {
        self.channel(name).ok_or_else(|| HubError::UnknownChannel {
            name: name.to_string(),
        })
    }

    fn lock_channels(&self) -> MutexGuard<'_, Vec<Arc<Channel>>> {
        self.channels.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::channels::HandlerFn;
    use crate::events::Event;

    #[test]
    fn test_add_is_idempotent() {
        let hub = Hub::new();
        let a = hub.add("status");
        let b = hub.add("status");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(hub.len(), 1);
    }

    #[test]
    fn test_names_keep_creation_order() {
        let hub = Hub::new();
        hub.add("heartbeat");
        hub.add("status");
        hub.add("report");
        let names: Vec<_> = hub.names().iter().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["heartbeat", "status", "report"]);
    }

    #[test]
    fn test_unknown_channel_errors() {
        let hub = Hub::new();
        let err = hub
            .register("ghost", HandlerFn::arc("probe", |_ev: Event| async {}))
            .unwrap_err();
        assert_eq!(err.as_label(), "unknown_channel");
        assert!(err.as_message().contains("ghost"));
    }

    #[tokio::test]
    async fn test_by_name_roundtrip() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_in = Arc::clone(&log);

        let hub = Hub::new();
        hub.add("status");
        let sub = hub
            .register(
                "status",
                HandlerFn::arc("probe", move |ev: Event| {
                    let log = Arc::clone(&log_in);
                    async move {
                        log.lock().unwrap().push(ev.payload.text().unwrap_or("").to_string());
                    }
                }),
            )
            .unwrap();

        hub.dispatch("status", Payload::message("ping")).await.unwrap();
        assert_eq!(log.lock().unwrap().as_slice(), ["ping"]);

        assert!(hub.deregister("status", sub).unwrap());
        assert!(!hub.deregister("status", sub).unwrap());

        hub.dispatch("status", Payload::message("silence")).await.unwrap();
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_on_unknown_channel_errors() {
        let hub = Hub::new();
        let err = hub.dispatch("ghost", Payload::Empty).await.unwrap_err();
        assert!(matches!(err, HubError::UnknownChannel { .. }));
    }
}
