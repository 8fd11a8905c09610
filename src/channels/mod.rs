//! Multicast dispatch: channels, handlers, and the hub that names them.
//!
//! ## Architecture
//! ```text
//! Hub
//!  ├─► Channel "heartbeat"  [ (sub#1, H1) (sub#2, H2) ... ]   ordered
//!  ├─► Channel "status"     [ ... ]
//!  └─► Channel "report"     [ ... ]
//!
//! dispatch(payload):
//!   snapshot entries ──► empty? return ──► Event::new ──► H1.on_event().await
//!                                                     ──► H2.on_event().await
//!                                                     ──► ...
//! ```
//!
//! ## Rules
//! - Handlers run **in registration order**, one at a time; every handler
//!   finishes before `dispatch` returns.
//! - Registering the same handler twice creates two independent entries,
//!   each with its own [`Subscription`] token.
//! - Deregistering a token that is no longer present is a no-op.
//! - Dispatch on a channel with no handlers is a no-op, never an error.
//! - The registry does not catch handler panics; containment is the
//!   caller's business.

mod channel;
mod handler;
mod handler_fn;
mod hub;

pub use channel::{Channel, Subscription};
pub use handler::{Handle, HandlerRef};
pub use handler_fn::HandlerFn;
pub use hub::Hub;
