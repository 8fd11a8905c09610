//! # Output sinks
//!
//! Handlers and the emitter produce lines, not writes to a hard-wired
//! console: every line goes through a [`Sink`], injected at construction.
//! That keeps the dispatch mechanism observable in tests without capturing
//! process-wide stdout.
//!
//! - [`MemorySink`]: collects lines in memory (tests, assertions).
//! - [`ConsoleSink`]: prints lines to stdout _(demo/reference only,
//!   `console` feature)_.

mod memory;
mod sink;

#[cfg(feature = "console")]
mod console;

#[cfg(feature = "console")]
pub use console::ConsoleSink;
pub use memory::MemorySink;
pub use sink::Sink;
