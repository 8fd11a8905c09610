//! # Emitter: work-cycle driver on the publishing side.
//!
//! The [`Emitter`] owns a [`Hub`] with three standard channels and performs
//! a fixed sequence of work steps, each ending in a dispatch:
//!
//! ```text
//! run_cycle():
//!   raise heartbeat (Empty)            ── pace ──►
//!   raise status    (default message)  ── pace ──►
//!   raise report    (summary + detail) ── pace ──►
//!   raise status ×5 ("Repeated Invocation {i}", i = 0..4), pacing between
//! ```
//!
//! Every step is narrated through the emitter's [`Sink`], whether or not
//! anyone is listening; dispatches themselves are silent no-ops on channels
//! without handlers.
//!
//! The pause between steps comes from [`Config::pace`] and exists only to
//! keep interleaved console output readable. It defaults to zero.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use eventcast::{Config, Emitter, MemorySink, Sink};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let sink = Arc::new(MemorySink::new());
//!     let emitter = Emitter::new(Config::default(), Arc::clone(&sink) as Arc<dyn Sink>);
//!
//!     emitter.run_cycle().await;
//!
//!     // Narration happens even with no handlers registered.
//!     assert!(!sink.is_empty());
//! }
//! ```

use std::sync::Arc;

use crate::channels::{Channel, Hub};
use crate::config::Config;
use crate::events::Payload;
use crate::sinks::Sink;

/// Publisher side: three standard channels plus the work cycle that fires them.
pub struct Emitter {
    hub: Hub,
    heartbeat: Arc<Channel>,
    status: Arc<Channel>,
    report: Arc<Channel>,
    sink: Arc<dyn Sink>,
    config: Config,
}

impl Emitter {
    /// Channel that fires with [`Payload::Empty`].
    pub const HEARTBEAT: &'static str = "heartbeat";
    /// Channel that fires with [`Payload::Message`].
    pub const STATUS: &'static str = "status";
    /// Channel that fires with [`Payload::Report`].
    pub const REPORT: &'static str = "report";

    /// Message used for the first status raise of each cycle.
    pub const DEFAULT_STATUS: &'static str = "routine status update";

    /// How many extra status raises close out each cycle.
    const REPEATED_STATUS_RAISES: usize = 5;

    /// Creates an emitter with its standard channels.
    ///
    /// Channels live as long as the emitter; only their handler lists change
    /// afterwards.
    pub fn new(config: Config, sink: Arc<dyn Sink>) -> Self {
        let hub = Hub::new();
        let heartbeat = hub.add(Self::HEARTBEAT);
        let status = hub.add(Self::STATUS);
        let report = hub.add(Self::REPORT);
        Self {
            hub,
            heartbeat,
            status,
            report,
            sink,
            config,
        }
    }

    /// The hub holding this emitter's channels.
    ///
    /// Subscribers register and deregister through it; the emitter itself
    /// never touches handler lists.
    pub fn hub(&self) -> &Hub {
        &self.hub
    }

    /// Looks up one of this emitter's channels by name.
    pub fn channel(&self, name: &str) -> Option<Arc<Channel>> {
        self.hub.channel(name)
    }

    /// Performs one full work cycle.
    ///
    /// Dispatch order is fixed: heartbeat, status (default message), report,
    /// then five more status raises whose payload encodes the iteration
    /// index. All registered handlers for a step complete before the next
    /// step begins.
    pub async fn run_cycle(&self) {
        self.note("emitter: starting work cycle");

        self.note("emitter: raising heartbeat");
        self.heartbeat.dispatch(Payload::Empty).await;
        self.pace().await;

        self.note("emitter: raising status");
        self.status
            .dispatch(Payload::message(Self::DEFAULT_STATUS))
            .await;
        self.pace().await;

        self.note("emitter: raising report");
        self.report
            .dispatch(Payload::report("work step complete", "all probes nominal"))
            .await;
        self.pace().await;

        self.note(&format!(
            "emitter: raising status {} more times",
            Self::REPEATED_STATUS_RAISES
        ));
        for i in 0..Self::REPEATED_STATUS_RAISES {
            self.status
                .dispatch(Payload::message(format!("Repeated Invocation {i}")))
                .await;
            self.pace().await;
        }
    }

    async fn pace(&self) {
        if let Some(delay) = self.config.pace_delay() {
            tokio::time::sleep(delay).await;
        }
    }

    fn note(&self, line: &str) {
        self.sink.write_line(line);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::channels::HandlerFn;
    use crate::events::Event;
    use crate::sinks::MemorySink;

    fn emitter_with_sink() -> (Emitter, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let emitter = Emitter::new(Config::default(), Arc::clone(&sink) as Arc<dyn Sink>);
        (emitter, sink)
    }

    #[tokio::test]
    async fn test_cycle_narrates_even_with_nobody_listening() {
        let (emitter, sink) = emitter_with_sink();
        emitter.run_cycle().await;

        let lines = sink.lines();
        assert!(lines.iter().any(|l| l.contains("raising heartbeat")));
        assert!(lines.iter().any(|l| l.contains("raising report")));
    }

    #[tokio::test]
    async fn test_status_fires_six_times_per_cycle() {
        let (emitter, _sink) = emitter_with_sink();
        let texts = Arc::new(Mutex::new(Vec::new()));
        let texts_in = Arc::clone(&texts);

        emitter
            .channel(Emitter::STATUS)
            .unwrap()
            .register(HandlerFn::arc("collect", move |ev: Event| {
                let texts = Arc::clone(&texts_in);
                async move {
                    texts
                        .lock()
                        .unwrap()
                        .push(ev.payload.text().unwrap_or("").to_string());
                }
            }));

        emitter.run_cycle().await;

        let texts = texts.lock().unwrap();
        assert_eq!(texts.len(), 6);
        assert_eq!(texts[0], Emitter::DEFAULT_STATUS);
    }

    #[tokio::test]
    async fn test_repeated_status_encodes_iteration_index() {
        let (emitter, _sink) = emitter_with_sink();
        let texts = Arc::new(Mutex::new(Vec::new()));
        let texts_in = Arc::clone(&texts);

        emitter
            .channel(Emitter::STATUS)
            .unwrap()
            .register(HandlerFn::arc("collect", move |ev: Event| {
                let texts = Arc::clone(&texts_in);
                async move {
                    texts
                        .lock()
                        .unwrap()
                        .push(ev.payload.text().unwrap_or("").to_string());
                }
            }));

        emitter.run_cycle().await;

        let texts = texts.lock().unwrap();
        for i in 0..5 {
            assert_eq!(texts[i + 1], format!("Repeated Invocation {i}"));
        }
    }

    #[tokio::test]
    async fn test_heartbeat_and_report_payload_shapes() {
        let (emitter, _sink) = emitter_with_sink();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for name in [Emitter::HEARTBEAT, Emitter::REPORT] {
            let seen_in = Arc::clone(&seen);
            emitter
                .channel(name)
                .unwrap()
                .register(HandlerFn::arc("shape", move |ev: Event| {
                    let seen = Arc::clone(&seen_in);
                    async move {
                        seen.lock().unwrap().push(ev);
                    }
                }));
        }

        emitter.run_cycle().await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].is_on(Emitter::HEARTBEAT));
        assert!(seen[0].payload.is_empty());
        assert!(seen[1].is_on(Emitter::REPORT));
        assert!(seen[1].payload.summary().is_some());
        assert!(seen[1].payload.detail().is_some());
        assert!(seen[0].seq < seen[1].seq);
    }

    #[test]
    fn test_standard_channels_exist() {
        let (emitter, _sink) = emitter_with_sink();
        assert_eq!(emitter.hub().len(), 3);
        assert!(emitter.channel(Emitter::HEARTBEAT).is_some());
        assert!(emitter.channel(Emitter::STATUS).is_some());
        assert!(emitter.channel(Emitter::REPORT).is_some());
        assert!(emitter.channel("ghost").is_none());
    }
}
