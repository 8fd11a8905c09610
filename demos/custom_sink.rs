//! # Example: custom_sink
//!
//! Demonstrates how to build and inject a custom output sink.
//!
//! Shows how to:
//! - Implement the [`Sink`] trait.
//! - Wire one sink instance into both the [`Emitter`] and the [`Receiver`].
//! - Inspect what was captured after the script finishes.
//!
//! ## Run
//! ```bash
//! cargo run --example custom_sink
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use eventcast::{Config, Emitter, Receiver, Sink};

/// A sink that numbers every line and counts probe output separately.
/// In real life, this could ship lines to a logger or a metrics pipeline.
struct NumberingSink {
    written: AtomicU64,
    probe_lines: AtomicU64,
}

impl NumberingSink {
    fn new() -> Self {
        Self {
            written: AtomicU64::new(0),
            probe_lines: AtomicU64::new(0),
        }
    }

    fn print_stats(&self) {
        println!();
        println!("Sink stats:");
        println!(" ├─► Lines total: {}", self.written.load(Ordering::Relaxed));
        println!(
            " └─► Probe lines: {}",
            self.probe_lines.load(Ordering::Relaxed)
        );
    }
}

impl Sink for NumberingSink {
    fn write_line(&self, line: &str) {
        let n = self.written.fetch_add(1, Ordering::Relaxed) + 1;
        if line.starts_with("receiver[") {
            self.probe_lines.fetch_add(1, Ordering::Relaxed);
        }
        println!("{n:>3} | {line}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cfg = Config {
        pace: Duration::from_millis(200),
    };

    let sink = Arc::new(NumberingSink::new());

    let emitter = Arc::new(Emitter::new(cfg, Arc::clone(&sink) as Arc<dyn Sink>));
    let receiver = Receiver::new(Arc::clone(&emitter), Arc::clone(&sink) as Arc<dyn Sink>);

    receiver.run().await?;

    sink.print_stats();
    Ok(())
}
