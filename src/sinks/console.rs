//! # ConsoleSink — stdout printer
//!
//! Prints each line to stdout. Use it for demos; tests should prefer
//! [`MemorySink`](crate::MemorySink).

use super::sink::Sink;

/// Line sink that prints to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Construct a new [`ConsoleSink`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}
