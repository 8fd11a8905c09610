//! # Channel: ordered multicast registry for one notification point.
//!
//! A [`Channel`] holds an ordered sequence of handler entries. Registration
//! appends and yields an opaque [`Subscription`] token; deregistration
//! removes the entry for a token and is a no-op when the token is not
//! present; dispatch invokes every currently registered handler in
//! registration order and completes only after the last handler returns.
//!
//! Closures have no usable identity, so removal is token-based: duplicate
//! registrations of one handler get distinct tokens and are removed one at
//! a time.
//!
//! ## Locking
//! The entry list lives behind a brief mutex that is never held across an
//! await. `dispatch` snapshots the list and invokes handlers outside the
//! lock, so a handler may register or deregister on the very channel that
//! is mid-dispatch; the change applies from the next dispatch.
//!
//! ## Example
//! ```rust
//! use eventcast::{Channel, Event, HandlerFn, HandlerRef};
//!
//! let channel = Channel::new("status");
//! let probe: HandlerRef = HandlerFn::arc("probe", |_ev: Event| async {});
//!
//! let sub = channel.register(probe);
//! assert_eq!(channel.len(), 1);
//!
//! assert!(channel.deregister(sub));
//! assert!(!channel.deregister(sub)); // already removed: no-op
//! assert!(channel.is_empty());
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::handler::HandlerRef;
use crate::events::{Event, Payload};

/// Global counter backing subscription tokens.
static SUBSCRIPTION_SEQ: AtomicU64 = AtomicU64::new(0);

/// Opaque token identifying one registration on one channel.
///
/// Returned by [`Channel::register`]; required by [`Channel::deregister`].
/// Tokens are process-globally unique, so a token never matches a
/// registration other than the one that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

impl Subscription {
    fn next() -> Self {
        Self(SUBSCRIPTION_SEQ.fetch_add(1, AtomicOrdering::Relaxed))
    }

    /// Raw token value (for logs).
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// One registration: token + handler.
struct Entry {
    sub: Subscription,
    handler: HandlerRef,
}

/// Named notification point with an ordered handler sequence.
pub struct Channel {
    name: Arc<str>,
    entries: Mutex<Vec<Entry>>,
}

impl Channel {
    /// Creates an empty channel with the given name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Returns the channel name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a handler to the sequence and returns its token.
    ///
    /// No de-duplication: registering the same handler again creates an
    /// independent entry with its own token.
    pub fn register(&self, handler: HandlerRef) -> Subscription {
        let sub = Subscription::next();
        self.lock_entries().push(Entry { sub, handler });
        sub
    }

    /// Removes the registration for `sub`.
    ///
    /// Returns `true` if an entry was removed, `false` if the token was not
    /// present. Never an error: deregistering twice, or deregistering a
    /// token issued by another channel, is a no-op.
    pub fn deregister(&self, sub: Subscription) -> bool {
        let mut entries = self.lock_entries();
        match entries.iter().position(|e| e.sub == sub) {
            Some(idx) => {
                entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Invokes every currently registered handler, in registration order.
    ///
    /// All handlers complete before this returns. With no handlers
    /// registered this is a no-op: no event is constructed and no sequence
    /// number is consumed. Handler panics are not caught here.
    pub async fn dispatch(&self, payload: Payload) {
        let snapshot: Vec<HandlerRef> = {
            let entries = self.lock_entries();
            if entries.is_empty() {
                return;
            }
            entries.iter().map(|e| Arc::clone(&e.handler)).collect()
        };

        let event = Event::new(Arc::clone(&self.name), payload);
        for handler in snapshot {
            handler.on_event(&event).await;
        }
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    /// True if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    // Handlers run outside the lock, so only a panic inside register or
    // deregister could poison it; the list is structurally sound either way.
    fn lock_entries(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("name", &self.name)
            .field("handlers", &self.len())
            .finish()
    }
}
