//! Requests and replies understood by the factorization worker.
//!
//! These are handled by [`FactorWorker`](super::FactorWorker)'s
//! [`Behavior`](crate::framework::Behavior) implementation.

use super::error::WorkerError;
use crate::compute::Factors;

/// Fire-and-forget requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerCast {
    /// Factor the number and keep the result for later retrieval.
    Factorize(u64),
}

/// Requests that expect a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerCall {
    /// Fetch a previously computed result.
    GetResult(u64),
    /// Report how many results the worker holds.
    Stats,
}

/// Replies - variants match 1:1 with [`WorkerCall`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerReply {
    /// `Err(WorkerError::NotFound)` if the number has no result yet.
    Result(Result<Factors, WorkerError>),
    Stats { completed: usize },
}
