//! # Framework Errors
//!
//! Errors raised by the actor runtime itself, independent of any behavior.

use std::time::Duration;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("No reply within {0:?}")]
    Timeout(Duration),
}
