//! # Emitter configuration.
//!
//! Provides [`Config`], the settings for an [`Emitter`](crate::Emitter)
//! work cycle.
//!
//! ## Sentinel values
//! - `pace = 0s` → no pacing between work steps (treated as `None` by
//!   [`Config::pace_delay`])

use std::time::Duration;

/// Configuration for the emitter's work cycle.
///
/// ## Field semantics
/// - `pace`: cosmetic delay between work steps, there only to keep
///   interleaved console output legible for a human. `0s` disables it,
///   which is the right setting for automated runs.
#[derive(Clone, Debug)]
pub struct Config {
    /// Delay inserted after each work step (`0s` = none).
    pub pace: Duration,
}

impl Config {
    /// Returns the pacing delay as an `Option`.
    ///
    /// - `None` → no pacing
    /// - `Some(d)` → sleep `d` after each work step
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use eventcast::Config;
    ///
    /// assert_eq!(Config::default().pace_delay(), None);
    ///
    /// let cfg = Config { pace: Duration::from_secs(1) };
    /// assert_eq!(cfg.pace_delay(), Some(Duration::from_secs(1)));
    /// ```
    #[inline]
    pub fn pace_delay(&self) -> Option<Duration> {
        if self.pace == Duration::ZERO {
            None
        } else {
            Some(self.pace)
        }
    }
}

impl Default for Config {
    /// Default configuration: `pace = 0s` (no pacing).
    fn default() -> Self {
        Self {
            pace: Duration::ZERO,
        }
    }
}
