//! # Function-backed handler (`HandlerFn`)
//!
//! [`HandlerFn`] wraps a closure `F: Fn(Event) -> Fut`, producing a fresh
//! future per event. The closure receives an owned clone of the event, so the
//! future it returns borrows nothing from the registry.
//!
//! ## Example
//! ```rust
//! use eventcast::{Event, Handle, HandlerFn, HandlerRef, Payload};
//!
//! let h: HandlerRef = HandlerFn::arc("greeter", |ev: Event| async move {
//!     let _ = ev.payload.text();
//! });
//!
//! assert_eq!(h.name(), "greeter");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use super::handler::Handle;
use crate::events::Event;

/// Function-backed handler implementation.
///
/// Wraps a closure that *creates* a new future per event.
#[derive(Debug)]
pub struct HandlerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a
    /// [`HandlerRef`](crate::HandlerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the handler and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut> Handle for HandlerFn<F>
where
    F: Fn(Event) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn on_event(&self, event: &Event) {
        (self.f)(event.clone()).await;
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::events::Payload;

    #[tokio::test]
    async fn test_invokes_closure_with_event() {
        let hits = Arc::new(AtomicU32::new(0));
        let hits_in = Arc::clone(&hits);

        let h = HandlerFn::new("counter", move |ev: Event| {
            let hits = Arc::clone(&hits_in);
            async move {
                assert!(ev.is_on("status"));
                hits.fetch_add(1, Ordering::Relaxed);
            }
        });

        let ev = Event::new("status", Payload::message("x"));
        h.on_event(&ev).await;
        h.on_event(&ev).await;
        assert_eq!(hits.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_name_is_kept() {
        let h = HandlerFn::new("named", |_ev: Event| async {});
        assert_eq!(h.name(), "named");
    }
}
