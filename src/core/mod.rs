//! Runtime core: the publisher/subscriber pair that exercises the channels.
//!
//! Internal modules:
//! - [`emitter`]: owns the standard channels and drives the fixed work cycle;
//! - [`receiver`]: attaches, exercises, and detaches probes over an emitter's
//!   lifetime.

mod emitter;
mod receiver;

pub use emitter::Emitter;
pub use receiver::Receiver;
