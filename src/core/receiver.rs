//! # Receiver: handler lifecycle driver on the subscribing side.
//!
//! The [`Receiver`] holds a shared [`Emitter`] and exercises the full
//! registration lifecycle against it:
//!
//! ```text
//! run():
//!   1. cycle with no probes attached      → every dispatch is a no-op
//!   2. attach probes: heartbeat, status,
//!      and TWO on report                  → cycle: all probes fire,
//!                                           report fires both, in order
//!   3. detach heartbeat, status, and the
//!      primary report probe               → cycle: only the secondary
//!                                           report probe fires
//!   4. detach everything that remains     → re-detaching already-removed
//!                                           probes is a no-op
//! ```
//!
//! Each probe writes one line per firing, naming the probe and carrying the
//! payload content. Attach and detach happen at runtime, between cycles;
//! nothing about the registration set is fixed at construction.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::channels::{HandlerFn, HandlerRef, Subscription};
use crate::core::Emitter;
use crate::error::HubError;
use crate::events::Event;
use crate::sinks::Sink;

/// Tokens for the receiver's registrations.
///
/// Tokens are not cleared on detach; re-detaching with a stale token is the
/// documented no-op path, and the final sweep exercises it.
#[derive(Default)]
struct Probes {
    heartbeat: Option<Subscription>,
    status: Option<Subscription>,
    report_primary: Option<Subscription>,
    report_secondary: Option<Subscription>,
}

/// Subscriber side: attaches probes to an emitter's channels, triggers work,
/// detaches at runtime.
pub struct Receiver {
    emitter: Arc<Emitter>,
    sink: Arc<dyn Sink>,
    probes: Mutex<Probes>,
}

impl Receiver {
    /// Creates a receiver bound to the given emitter.
    ///
    /// Holds a shared reference only; the emitter outlives any one receiver.
    pub fn new(emitter: Arc<Emitter>, sink: Arc<dyn Sink>) -> Self {
        Self {
            emitter,
            sink,
            probes: Mutex::new(Probes::default()),
        }
    }

    /// Runs the scripted lifecycle: bare cycle, fully-attached cycle,
    /// partially-detached cycle, final detach sweep.
    pub async fn run(&self) -> Result<(), HubError> {
        self.note("receiver: cycle 1, no probes attached");
        self.emitter.run_cycle().await;

        self.attach_probes()?;
        self.note("receiver: cycle 2, all probes attached");
        self.emitter.run_cycle().await;

        self.detach_some()?;
        self.note("receiver: cycle 3, only the secondary report probe left");
        self.emitter.run_cycle().await;

        self.detach_all()?;
        Ok(())
    }

    /// Attaches one probe each on heartbeat and status, and two on report.
    ///
    /// The two report probes fire in this registration order on every report
    /// dispatch: primary first, secondary second.
    pub fn attach_probes(&self) -> Result<(), HubError> {
        self.note("receiver: attaching probes");
        let hub = self.emitter.hub();
        let mut probes = self.lock_probes();
        probes.heartbeat = Some(hub.register(Emitter::HEARTBEAT, self.heartbeat_probe())?);
        probes.status = Some(hub.register(Emitter::STATUS, self.status_probe())?);
        probes.report_primary = Some(hub.register(Emitter::REPORT, self.report_primary_probe())?);
        probes.report_secondary =
            Some(hub.register(Emitter::REPORT, self.report_secondary_probe())?);
        Ok(())
    }

    /// Detaches the heartbeat, status, and primary report probes, leaving
    /// the secondary report probe attached.
    pub fn detach_some(&self) -> Result<(), HubError> {
        self.note("receiver: detaching heartbeat, status, and primary report probes");
        let hub = self.emitter.hub();
        let probes = self.lock_probes();
        if let Some(sub) = probes.heartbeat {
            hub.deregister(Emitter::HEARTBEAT, sub)?;
        }
        if let Some(sub) = probes.status {
            hub.deregister(Emitter::STATUS, sub)?;
        }
        if let Some(sub) = probes.report_primary {
            hub.deregister(Emitter::REPORT, sub)?;
        }
        Ok(())
    }

    /// Detaches every probe this receiver ever attached.
    ///
    /// Some tokens may already be gone after [`Receiver::detach_some`];
    /// deregistering those again is a no-op, not an error.
    pub fn detach_all(&self) -> Result<(), HubError> {
        self.note("receiver: detaching remaining probes");
        let hub = self.emitter.hub();
        let probes = self.lock_probes();
        if let Some(sub) = probes.heartbeat {
            hub.deregister(Emitter::HEARTBEAT, sub)?;
        }
        if let Some(sub) = probes.status {
            hub.deregister(Emitter::STATUS, sub)?;
        }
        if let Some(sub) = probes.report_primary {
            hub.deregister(Emitter::REPORT, sub)?;
        }
        if let Some(sub) = probes.report_secondary {
            hub.deregister(Emitter::REPORT, sub)?;
        }
        Ok(())
    }

    fn heartbeat_probe(&self) -> HandlerRef {
        let sink = Arc::clone(&self.sink);
        HandlerFn::arc("heartbeat-probe", move |_ev: Event| {
            let sink = Arc::clone(&sink);
            async move {
                sink.write_line("receiver[heartbeat-probe]: heartbeat observed");
            }
        })
    }

    fn status_probe(&self) -> HandlerRef {
        let sink = Arc::clone(&self.sink);
        HandlerFn::arc("status-probe", move |ev: Event| {
            let sink = Arc::clone(&sink);
            async move {
                let text = ev.payload.text().unwrap_or("<none>");
                sink.write_line(&format!("receiver[status-probe]: {text}"));
            }
        })
    }

    fn report_primary_probe(&self) -> HandlerRef {
        let sink = Arc::clone(&self.sink);
        HandlerFn::arc("report-primary", move |ev: Event| {
            let sink = Arc::clone(&sink);
            async move {
                let summary = ev.payload.summary().unwrap_or("<none>");
                sink.write_line(&format!("receiver[report-primary]: {summary}"));
            }
        })
    }

    fn report_secondary_probe(&self) -> HandlerRef {
        let sink = Arc::clone(&self.sink);
        HandlerFn::arc("report-secondary", move |ev: Event| {
            let sink = Arc::clone(&sink);
            async move {
                let detail = ev.payload.detail().unwrap_or("<none>");
                sink.write_line(&format!("receiver[report-secondary]: {detail}"));
            }
        })
    }

    fn note(&self, line: &str) {
        self.sink.write_line(line);
    }

    fn lock_probes(&self) -> MutexGuard<'_, Probes> {
        self.probes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sinks::MemorySink;

    fn wired() -> (Arc<Emitter>, Receiver, Arc<MemorySink>) {
        let emitter_sink = Arc::new(MemorySink::new());
        let receiver_sink = Arc::new(MemorySink::new());
        let emitter = Arc::new(Emitter::new(
            Config::default(),
            Arc::clone(&emitter_sink) as Arc<dyn Sink>,
        ));
        let receiver = Receiver::new(
            Arc::clone(&emitter),
            Arc::clone(&receiver_sink) as Arc<dyn Sink>,
        );
        (emitter, receiver, receiver_sink)
    }

    fn probe_lines(sink: &MemorySink) -> Vec<String> {
        sink.lines()
            .into_iter()
            .filter(|l| l.starts_with("receiver["))
            .collect()
    }

    fn count_with(lines: &[String], needle: &str) -> usize {
        lines.iter().filter(|l| l.contains(needle)).count()
    }

    #[tokio::test]
    async fn test_cycle_with_no_probes_observes_nothing() {
        let (emitter, _receiver, sink) = wired();
        emitter.run_cycle().await;
        assert!(probe_lines(&sink).is_empty());
    }

    #[tokio::test]
    async fn test_cycle_with_all_probes_attached() {
        let (emitter, receiver, sink) = wired();
        receiver.attach_probes().unwrap();
        emitter.run_cycle().await;

        let lines = probe_lines(&sink);
        assert_eq!(count_with(&lines, "heartbeat-probe"), 1);
        assert_eq!(count_with(&lines, "status-probe"), 6);
        assert_eq!(count_with(&lines, "report-primary"), 1);
        assert_eq!(count_with(&lines, "report-secondary"), 1);
    }

    #[tokio::test]
    async fn test_report_probes_fire_in_registration_order() {
        let (emitter, receiver, sink) = wired();
        receiver.attach_probes().unwrap();
        emitter.run_cycle().await;

        let lines = probe_lines(&sink);
        let primary = lines.iter().position(|l| l.contains("report-primary"));
        let secondary = lines.iter().position(|l| l.contains("report-secondary"));
        assert!(primary.unwrap() < secondary.unwrap());
    }

    #[tokio::test]
    async fn test_cycle_after_partial_detach() {
        let (emitter, receiver, sink) = wired();
        receiver.attach_probes().unwrap();
        emitter.run_cycle().await;

        receiver.detach_some().unwrap();
        let already_seen = sink.len();
        emitter.run_cycle().await;

        let fresh: Vec<String> = sink.lines().split_off(already_seen);
        let fresh_probes: Vec<String> = fresh
            .into_iter()
            .filter(|l| l.starts_with("receiver["))
            .collect();
        assert_eq!(fresh_probes.len(), 1);
        assert!(fresh_probes[0].contains("report-secondary"));
    }

    #[tokio::test]
    async fn test_detach_all_tolerates_already_removed_tokens() {
        let (_emitter, receiver, _sink) = wired();
        receiver.attach_probes().unwrap();
        receiver.detach_some().unwrap();
        // Three of the four tokens are stale at this point.
        receiver.detach_all().unwrap();
        receiver.detach_all().unwrap();
    }

    #[tokio::test]
    async fn test_full_script_line_counts() {
        let (emitter, receiver, sink) = wired();
        receiver.run().await.unwrap();

        let lines = probe_lines(&sink);
        assert_eq!(count_with(&lines, "heartbeat-probe"), 1);
        assert_eq!(count_with(&lines, "status-probe"), 6);
        assert_eq!(count_with(&lines, "report-primary"), 1);
        assert_eq!(count_with(&lines, "report-secondary"), 2);

        // Nothing is left behind on the emitter.
        for name in [Emitter::HEARTBEAT, Emitter::STATUS, Emitter::REPORT] {
            assert!(emitter.channel(name).unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_repeated_status_lines_encode_iteration() {
        let (emitter, receiver, sink) = wired();
        receiver.attach_probes().unwrap();
        emitter.run_cycle().await;

        let status: Vec<String> = probe_lines(&sink)
            .into_iter()
            .filter(|l| l.contains("status-probe"))
            .collect();
        assert_eq!(status.len(), 6);
        for (i, line) in status[1..].iter().enumerate() {
            assert!(line.ends_with(&format!("Repeated Invocation {i}")));
        }
    }
}
