//! # MemorySink — in-memory line capture
//!
//! Collects every line in a `Vec<String>` for later inspection. This is the
//! sink the test suite observes dispatch through.
//!
//! ## Example
//! ```rust
//! use eventcast::{MemorySink, Sink};
//!
//! let sink = MemorySink::new();
//! sink.write_line("hello");
//! assert_eq!(sink.lines(), vec!["hello"]);
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::sink::Sink;

/// Line sink backed by an in-memory vector.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything written so far, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.lock_lines().clone()
    }

    /// Number of lines written so far.
    pub fn len(&self) -> usize {
        self.lock_lines().len()
    }

    /// True if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lock_lines().is_empty()
    }

    fn lock_lines(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lock_lines().push(line.to_string());
    }
}
