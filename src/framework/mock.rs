//! # Mock Actors & Testing Guide
//!
//! Testing code that talks to actors is awkward when every reply depends on the scheduler.
//! This module offers two ways to stand in for a real actor:
//!
//! | Tool | What you control | Use Case |
//! |------|------------------|----------|
//! | [`create_mock_actor`] + [`expect_cast`] / [`expect_call`] | Every message, by hand | Asserting exactly what a client sends |
//! | [`MockActor`] | A queue of expectations | Scripting replies, including *no* reply |
//!
//! A real [`Actor`] handle is handed out in both cases, so the code under test cannot tell
//! the difference.
//!
//! ## Timeouts & Dropped Replies
//!
//! Error paths that are hard to provoke with a real actor are one line with a mock:
//!
//! ```rust
//! use factor_pool::clients::WorkerClient;
//! use factor_pool::framework::mock::MockActor;
//! use factor_pool::worker_actor::{FactorWorker, WorkerError};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockActor::<FactorWorker>::new("silent");
//!     mock.expect_call().never_reply();
//!
//!     let client = WorkerClient::new(mock.actor(), Duration::from_millis(10));
//!     let err = client.get_result(42).await.unwrap_err();
//!     assert_eq!(err, WorkerError::Timeout(Duration::from_millis(10)));
//!     mock.verify();
//! }
//! ```

use crate::framework::{Actor, Behavior, Envelope, ReplyTo};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// What the mock does with the reply channel of an expected call.
enum ReplyPlan<R> {
    Reply(R),
    Never,
    Drop,
}

/// Represents an expected message to the mock actor.
enum Expectation<B: Behavior> {
    Cast,
    Call { plan: ReplyPlan<B::Reply> },
}

/// A scripted stand-in for an actor.
///
/// # Example
/// ```ignore
/// let mut mock = MockActor::<FactorWorker>::new("w1");
/// mock.expect_cast();
/// mock.expect_call().return_reply(WorkerReply::Stats { completed: 1 });
///
/// let actor = mock.actor();
/// // Use actor in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockActor<B: Behavior> {
    actor: Actor<B>,
    expectations: Arc<Mutex<VecDeque<Expectation<B>>>>,
    casts: Arc<Mutex<Vec<B::Cast>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<B: Behavior> MockActor<B> {
    /// Creates a new mock actor with no expectations.
    pub fn new(name: &str) -> Self {
        let (actor, mut receiver) = create_mock_actor::<B>(name);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let casts = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = Arc::clone(&expectations);
        let casts_clone = Arc::clone(&casts);

        // Spawn background task to play the actor's part
        let handle = tokio::spawn(async move {
            // Held until the mock goes away so that callers time out instead of seeing a drop
            let mut unanswered: Vec<ReplyTo<B::Reply>> = Vec::new();

            while let Some(envelope) = receiver.recv().await {
                if matches!(envelope, Envelope::Stop) {
                    break;
                }
                let expectation = expectations_clone
                    .lock()
                    .expect("expectations lock poisoned")
                    .pop_front();

                match (envelope, expectation) {
                    (Envelope::Cast(request), Some(Expectation::Cast)) => {
                        casts_clone
                            .lock()
                            .expect("casts lock poisoned")
                            .push(request);
                    }
                    (Envelope::Call { respond_to, .. }, Some(Expectation::Call { plan })) => {
                        match plan {
                            ReplyPlan::Reply(reply) => {
                                let _ = respond_to.send(reply);
                            }
                            ReplyPlan::Never => unanswered.push(respond_to),
                            ReplyPlan::Drop => drop(respond_to),
                        }
                    }
                    _ => {
                        panic!("Unexpected message or expectation mismatch");
                    }
                }
            }
        });

        Self {
            actor,
            expectations,
            casts,
            _handle: handle,
        }
    }

    /// Returns an address for the mock, for wiring into the code under test.
    pub fn actor(&self) -> Actor<B> {
        self.actor.clone()
    }

    /// Expects a cast. The request is recorded; see [`MockActor::take_casts`].
    pub fn expect_cast(&mut self) {
        self.expectations
            .lock()
            .expect("expectations lock poisoned")
            .push_back(Expectation::Cast);
    }

    /// Expects a call. Choose the reply on the returned builder.
    pub fn expect_call(&mut self) -> CallExpectationBuilder<B> {
        CallExpectationBuilder {
            expectations: Arc::clone(&self.expectations),
        }
    }

    /// Drains the casts received so far, in arrival order.
    pub fn take_casts(&self) -> Vec<B::Cast> {
        std::mem::take(&mut *self.casts.lock().expect("casts lock poisoned"))
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().expect("expectations lock poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for call expectations.
pub struct CallExpectationBuilder<B: Behavior> {
    expectations: Arc<Mutex<VecDeque<Expectation<B>>>>,
}

impl<B: Behavior> CallExpectationBuilder<B> {
    fn push(self, plan: ReplyPlan<B::Reply>) {
        self.expectations
            .lock()
            .expect("expectations lock poisoned")
            .push_back(Expectation::Call { plan });
    }

    /// Answers the call with `reply`.
    pub fn return_reply(self, reply: B::Reply) {
        self.push(ReplyPlan::Reply(reply));
    }

    /// Keeps the reply channel open without answering, so the caller times out.
    pub fn never_reply(self) {
        self.push(ReplyPlan::Never);
    }

    /// Drops the reply channel without answering.
    pub fn drop_reply(self) {
        self.push(ReplyPlan::Drop);
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates an actor handle and hands back the raw mailbox.
///
/// Nothing processes the mailbox; the test reads it with [`expect_cast`] / [`expect_call`]
/// and answers calls itself.
pub fn create_mock_actor<B: Behavior>(name: &str) -> (Actor<B>, mpsc::UnboundedReceiver<Envelope<B>>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (Actor::from_parts(sender, name), receiver)
}

/// Helper to verify that the next message is a cast.
pub async fn expect_cast<B: Behavior>(receiver: &mut mpsc::UnboundedReceiver<Envelope<B>>) -> Option<B::Cast> {
    match receiver.recv().await {
        Some(Envelope::Cast(request)) => Some(request),
        _ => None,
    }
}

/// Helper to verify that the next message is a call.
pub async fn expect_call<B: Behavior>(
    receiver: &mut mpsc::UnboundedReceiver<Envelope<B>>,
) -> Option<(B::Call, ReplyTo<B::Reply>)> {
    match receiver.recv().await {
        Some(Envelope::Call {
            request,
            respond_to,
        }) => Some((request, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::WorkerClient;
    use crate::worker_actor::{FactorWorker, WorkerCall, WorkerCast, WorkerError, WorkerReply};
    use std::time::Duration;

    #[tokio::test]
    async fn test_manual_mock_sees_exact_messages() {
        let (actor, mut receiver) = create_mock_actor::<FactorWorker>("manual");
        let client = WorkerClient::new(actor, Duration::from_secs(1));

        client.factorize(12).unwrap();
        let cast = expect_cast(&mut receiver).await.expect("Expected a cast");
        assert!(matches!(cast, WorkerCast::Factorize(12)));

        let pending = tokio::spawn(async move { client.get_result(12).await });
        let (request, respond_to) = expect_call(&mut receiver).await.expect("Expected a call");
        assert!(matches!(request, WorkerCall::GetResult(12)));
        respond_to.send(WorkerReply::Result(Ok(vec![2, 2, 3]))).unwrap();

        assert_eq!(pending.await.unwrap(), Ok(vec![2, 2, 3]));
    }

    #[tokio::test]
    async fn test_scripted_mock_replies_in_order() {
        let mut mock = MockActor::<FactorWorker>::new("scripted");
        mock.expect_cast();
        mock.expect_call().return_reply(WorkerReply::Stats { completed: 7 });
        mock.expect_call().drop_reply();

        let client = WorkerClient::new(mock.actor(), Duration::from_secs(1));
        client.factorize(99).unwrap();
        assert_eq!(client.completed().await, Ok(7));
        assert!(matches!(
            client.get_result(99).await,
            Err(WorkerError::ActorCommunicationError(_))
        ));

        let casts = mock.take_casts();
        assert_eq!(casts.len(), 1);
        assert!(matches!(casts[0], WorkerCast::Factorize(99)));
        mock.verify();
    }
}
