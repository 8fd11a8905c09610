//! # Core handler trait
//!
//! `Handle` is the extension point for attaching behavior to a channel.
//! A handler is invoked with a reference to each dispatched [`Event`] and
//! produces no return value; its job is the side effect.
//!
//! ## Contract
//! - Handlers on one channel run sequentially in registration order; a slow
//!   handler delays the ones registered after it and the dispatch itself.
//! - The registry does not catch panics or wrap failures. A handler that
//!   must survive its own errors handles them internally.
//!
//! ## Example (skeleton)
//! ```rust
//! use async_trait::async_trait;
//! use eventcast::{Event, Handle};
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl Handle for Audit {
//!     async fn on_event(&self, event: &Event) {
//!         // write audit record...
//!         let _ = event.seq;
//!     }
//!
//!     fn name(&self) -> &str {
//!         "audit"
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::events::Event;

/// Shared handle to a handler (`Arc<dyn Handle>`).
pub type HandlerRef = Arc<dyn Handle>;

/// Contract for channel handlers.
#[async_trait]
pub trait Handle: Send + Sync + 'static {
    /// Handle a single event.
    ///
    /// # Parameters
    /// - `event`: Reference to the event (does not transfer ownership)
    async fn on_event(&self, event: &Event);

    /// Human-readable name (for logs).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
