//! # Example: demo
//!
//! The full attach/trigger/detach script on the console.
//!
//! Builds one [`Emitter`] and one [`Receiver`] sharing a [`ConsoleSink`],
//! with a one-second pace between work steps so the interleaving is easy to
//! follow. Watch for:
//! - cycle 1: the emitter narrates but no probe lines appear;
//! - cycle 2: every raise has a matching probe line, and one report raise
//!   produces **two** probe lines (two probes attached to that channel);
//! - cycle 3: only the secondary report probe is still attached.
//!
//! ## Run
//! ```bash
//! cargo run --example demo --features console
//! ```

use std::sync::Arc;
use std::time::Duration;

use eventcast::{Config, ConsoleSink, Emitter, Receiver, Sink};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cfg = Config {
        pace: Duration::from_secs(1),
    };

    let sink: Arc<dyn Sink> = Arc::new(ConsoleSink::new());

    let emitter = Arc::new(Emitter::new(cfg, Arc::clone(&sink)));
    let receiver = Receiver::new(Arc::clone(&emitter), sink);

    receiver.run().await?;

    println!("done");
    Ok(())
}
