//! # Worker Client
//!
//! Provides a high-level API for interacting with a [`FactorWorker`] actor.
//! It wraps an `Actor<FactorWorker>` and exposes domain-specific methods.

use crate::clients::actor_client::ActorClient;
use crate::compute::Factors;
use crate::framework::{Actor, FrameworkError};
use crate::worker_actor::{FactorWorker, WorkerCall, WorkerCast, WorkerError, WorkerReply};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for interacting with one factorization worker.
#[derive(Clone, Debug)]
pub struct WorkerClient {
    inner: Actor<FactorWorker>,
    call_timeout: Duration,
}

impl WorkerClient {
    pub fn new(inner: Actor<FactorWorker>, call_timeout: Duration) -> Self {
        Self {
            inner,
            call_timeout,
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }
}

#[async_trait]
impl ActorClient<FactorWorker> for WorkerClient {
    type Error = WorkerError;

    fn inner(&self) -> &Actor<FactorWorker> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        WorkerError::from(e)
    }
}

impl WorkerClient {
    /// Submits `n` for factorization. Returns as soon as the request is queued.
    #[instrument(skip(self), fields(worker = %self.name()))]
    pub fn factorize(&self, n: u64) -> Result<(), WorkerError> {
        if n < 2 {
            return Err(WorkerError::InvalidInput(n));
        }
        debug!("Sending request");
        self.notify(WorkerCast::Factorize(n))
    }

    /// Fetches the result for `n` from this worker.
    ///
    /// # Errors
    /// - `WorkerError::NotFound` if the worker has no result for `n` (yet).
    /// - `WorkerError::Timeout` if the worker did not answer within the call timeout.
    #[instrument(skip(self), fields(worker = %self.name()))]
    pub async fn get_result(&self, n: u64) -> Result<Factors, WorkerError> {
        match self.request(WorkerCall::GetResult(n), self.call_timeout).await? {
            WorkerReply::Result(result) => result,
            other => Err(WorkerError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    /// Number of results the worker currently holds.
    #[instrument(skip(self), fields(worker = %self.name()))]
    pub async fn completed(&self) -> Result<usize, WorkerError> {
        match self.request(WorkerCall::Stats, self.call_timeout).await? {
            WorkerReply::Stats { completed } => Ok(completed),
            other => Err(WorkerError::UnexpectedReply(format!("{other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockActor;
    use crate::worker_actor::{self, WorkerArgs};

    #[tokio::test]
    async fn test_get_result_before_factorize_is_not_found() {
        let (client, _handle) = worker_actor::spawn("w", Duration::from_secs(1), WorkerArgs::default());

        assert_eq!(client.get_result(30).await, Err(WorkerError::NotFound(30)));

        client.factorize(30).unwrap();
        assert_eq!(client.get_result(30).await, Ok(vec![2, 3, 5]));
        assert_eq!(client.completed().await, Ok(1));
    }

    #[tokio::test]
    async fn test_rejects_items_below_two() {
        let (client, _handle) = worker_actor::spawn("w", Duration::from_secs(1), WorkerArgs::default());

        assert_eq!(client.factorize(0), Err(WorkerError::InvalidInput(0)));
        assert_eq!(client.factorize(1), Err(WorkerError::InvalidInput(1)));
        assert_eq!(client.completed().await, Ok(0));
    }

    #[tokio::test]
    async fn test_mismatched_reply_is_reported() {
        let mut mock = MockActor::<FactorWorker>::new("confused");
        mock.expect_call().return_reply(WorkerReply::Stats { completed: 3 });
        mock.expect_call().return_reply(WorkerReply::Result(Ok(vec![2, 3])));

        let client = WorkerClient::new(mock.actor(), Duration::from_secs(1));
        assert_eq!(
            client.get_result(6).await,
            Err(WorkerError::UnexpectedReply("Stats { completed: 3 }".into()))
        );
        assert_eq!(
            client.completed().await,
            Err(WorkerError::UnexpectedReply("Result(Ok([2, 3]))".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_stopped_worker_reports_communication_error() {
        let (client, handle) = worker_actor::spawn("w", Duration::from_secs(1), WorkerArgs::default());
        client.factorize(7).unwrap();
        client.stop().unwrap();

        let state = handle.await.unwrap();
        assert_eq!(state.results()[&7], vec![7]);

        assert!(matches!(
            client.factorize(10),
            Err(WorkerError::ActorCommunicationError(_))
        ));
        assert!(matches!(
            client.get_result(7).await,
            Err(WorkerError::ActorCommunicationError(_))
        ));
    }
}
