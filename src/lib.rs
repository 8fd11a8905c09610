//! # eventcast
//!
//! **Eventcast** is a small multicast notification library for Rust.
//!
//! It provides named notification channels to which any number of handlers
//! can be attached and detached at runtime, with ordered, synchronous-style
//! dispatch: every handler registered on a channel runs, in registration
//! order, before a dispatch completes. The crate is designed as a building
//! block for components that expose lifecycle or progress notifications to
//! interested observers.
//!
//! ## Architecture
//! ```text
//!     ┌──────────────┐                  ┌───────────────────────────────┐
//!     │   Receiver   │ ──registers────► │  Hub                          │
//!     │ (subscriber) │    Subscription  │   ├─ Channel "heartbeat"      │
//!     └──────┬───────┘   tokens back    │   ├─ Channel "status"         │
//!            │                          │   └─ Channel "report"         │
//!            │ triggers                 └───────────────┬───────────────┘
//!            ▼                                          │
//!     ┌──────────────┐    dispatch(payload)             │ per channel:
//!     │   Emitter    │ ─────────────────────────────────┘ ordered entries
//!     │ (publisher)  │
//!     └──────────────┘        Channel dispatch:
//!                               snapshot ─► Event::new ─► H1 ─► H2 ─► ...
//!                               (empty snapshot: guarded no-op)
//!                                          │
//!                                          ▼
//!                                    Sink (console / memory)
//! ```
//!
//! ## Rules
//! - **Ordered dispatch**: handlers run in registration order, one at a
//!   time; all of them finish before `dispatch` returns.
//! - **Guarded no-op**: dispatching a channel with no handlers does nothing
//!   and never fails.
//! - **Token-based removal**: registration returns an opaque
//!   [`Subscription`]; removal takes the token back. Removing a token twice
//!   is a no-op. Duplicate registrations are independent.
//! - **No containment**: the registry does not catch handler panics;
//!   callers needing resilience wrap their own handlers.
//!
//! ## Features
//! | Area          | Description                                             | Key types / traits                  |
//! |---------------|---------------------------------------------------------|-------------------------------------|
//! | **Channels**  | Named notification points with ordered handler lists.   | [`Channel`], [`Hub`]                |
//! | **Handlers**  | Attachable behavior, trait-backed or closure-backed.    | [`Handle`], [`HandlerFn`]           |
//! | **Events**    | Per-dispatch values with sequence/timestamp metadata.   | [`Event`], [`Payload`]              |
//! | **Work cycle**| Demo publisher/subscriber pair exercising the registry. | [`Emitter`], [`Receiver`]           |
//! | **Sinks**     | Pluggable line output, testable without stdout capture. | [`Sink`], [`MemorySink`]            |
//! | **Errors**    | Typed error for by-name channel lookup.                 | [`HubError`]                        |
//!
//! ## Optional features
//! - `console`: exports a stdout [`ConsoleSink`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//!
//! use eventcast::{Config, Emitter, HubError, MemorySink, Receiver, Sink};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), HubError> {
//!     let sink = Arc::new(MemorySink::new());
//!
//!     let emitter = Arc::new(Emitter::new(
//!         Config::default(),
//!         Arc::clone(&sink) as Arc<dyn Sink>,
//!     ));
//!     let receiver = Receiver::new(Arc::clone(&emitter), Arc::clone(&sink) as Arc<dyn Sink>);
//!
//!     // Bare cycle, fully-attached cycle, partially-detached cycle, sweep.
//!     receiver.run().await?;
//!
//!     assert!(sink
//!         .lines()
//!         .iter()
//!         .any(|l| l.ends_with("Repeated Invocation 4")));
//!     Ok(())
//! }
//! ```

mod channels;
mod config;
mod core;
mod error;
mod events;
mod sinks;

// ---- Public re-exports ----

pub use channels::{Channel, Handle, HandlerFn, HandlerRef, Hub, Subscription};
pub use config::Config;
pub use core::{Emitter, Receiver};
pub use error::HubError;
pub use events::{Event, Payload};
pub use sinks::{MemorySink, Sink};

// Optional: expose the stdout sink (demo/reference).
// Enable with: `--features console`
#[cfg(feature = "console")]
pub use sinks::ConsoleSink;
