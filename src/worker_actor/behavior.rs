//! Behavior implementation for the factorization worker.
//!
//! See the trait implementation on [`FactorWorker`] for the message handling.

use super::error::WorkerError;
use super::messages::{WorkerCall, WorkerCast, WorkerReply};
use crate::compute::{factor, Factors, PrimeTable};
use crate::framework::Behavior;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Arguments a worker is started with.
#[derive(Debug, Clone, Default)]
pub struct WorkerArgs {
    /// Shared read-only primes. Without one, each item generates its own.
    pub primes: Option<Arc<PrimeTable>>,
}

/// A worker's private memo of completed factorizations.
#[derive(Debug)]
pub struct FactorWorker {
    results: HashMap<u64, Factors>,
    primes: Option<Arc<PrimeTable>>,
}

impl FactorWorker {
    pub fn results(&self) -> &HashMap<u64, Factors> {
        &self.results
    }
}

#[async_trait]
impl Behavior for FactorWorker {
    type Args = WorkerArgs;
    type Cast = WorkerCast;
    type Call = WorkerCall;
    type Reply = WorkerReply;

    fn init(args: WorkerArgs) -> Self {
        Self {
            results: HashMap::new(),
            primes: args.primes,
        }
    }

    /// Computes `factor(n)` and stores it under `n`.
    ///
    /// The arithmetic runs on the blocking pool; the handler awaits it, so the worker still
    /// finishes one item before it looks at the next message.
    async fn handle_cast(&mut self, request: WorkerCast) {
        match request {
            WorkerCast::Factorize(n) => {
                let primes = self.primes.clone();
                let computed = tokio::task::spawn_blocking(move || match primes {
                    Some(table) => table.factor(n),
                    None => factor(n),
                })
                .await;

                match computed {
                    Ok(factors) => {
                        debug!(item = n, ?factors, "Factorized");
                        self.results.insert(n, factors);
                    }
                    Err(e) => warn!(item = n, error = %e, "Factorization failed"),
                }
            }
        }
    }

    /// Answers from the memo. Never changes state.
    async fn handle_call(&mut self, request: WorkerCall) -> WorkerReply {
        match request {
            WorkerCall::GetResult(n) => WorkerReply::Result(
                self.results
                    .get(&n)
                    .cloned()
                    .ok_or(WorkerError::NotFound(n)),
            ),
            WorkerCall::Stats => WorkerReply::Stats {
                completed: self.results.len(),
            },
        }
    }
}
