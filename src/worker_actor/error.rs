//! Error types for the factorization worker.

use crate::framework::FrameworkError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when submitting work to, or reading results from, a worker.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerError {
    /// The worker holds no result for this number: never submitted to it, or not processed yet.
    #[error("No result for {0}")]
    NotFound(u64),

    /// The worker did not answer within the call timeout.
    #[error("Worker did not reply within {0:?}")]
    Timeout(Duration),

    /// Work items must be at least 2.
    #[error("Invalid work item: {0}")]
    InvalidInput(u64),

    /// The worker answered with a reply that does not belong to the request.
    #[error("Unexpected reply: {0}")]
    UnexpectedReply(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for WorkerError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Timeout(after) => WorkerError::Timeout(after),
            other => WorkerError::ActorCommunicationError(other.to_string()),
        }
    }
}
