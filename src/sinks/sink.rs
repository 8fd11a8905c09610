//! # Core sink trait
//!
//! A [`Sink`] receives the lines produced by emitter narration and by
//! handlers. Implementations decide where lines go: stdout, memory, a file,
//! a logger.

/// Destination for output lines.
///
/// Implementations must be cheap to call from handlers; a sink that does
/// slow I/O slows the dispatch that feeds it.
pub trait Sink: Send + Sync + 'static {
    /// Records one line.
    fn write_line(&self, line: &str);
}
