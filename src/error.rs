//! Error types for by-name hub operations.
//!
//! The dispatch mechanism itself has no failure modes: dispatch on an empty
//! channel is a no-op and deregistering an absent token is a no-op. The only
//! thing that can go wrong is addressing a channel that does not exist, which
//! is a caller bug surfaced as [`HubError::UnknownChannel`].

use thiserror::Error;

/// # Errors produced by [`Hub`](crate::Hub) by-name operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HubError {
    /// The named channel does not exist on this hub.
    #[error("unknown channel: {name}")]
    UnknownChannel {
        /// The name that failed to resolve.
        name: String,
    },
}

impl HubError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use eventcast::HubError;
    ///
    /// let err = HubError::UnknownChannel { name: "missing".into() };
    /// assert_eq!(err.as_label(), "unknown_channel");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            HubError::UnknownChannel { .. } => "unknown_channel",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            HubError::UnknownChannel { name } => format!("no channel named {name:?}"),
        }
    }
}
