//! # Factorization Worker
//!
//! This module implements the worker actor that the pool runs in every slot.
//!
//! ## Overview
//!
//! A worker accumulates factorization results keyed by input number. Submission and
//! retrieval are separate messages:
//!
//! - `Factorize(n)` is a **cast**: the worker computes and keeps the result, nobody waits.
//! - `GetResult(n)` is a **call**: the worker answers from what it already holds.
//!
//! That split lets a client queue every submission before it blocks on any result.
//!
//! ## Structure
//!
//! - [`behavior`] - [`Behavior`](crate::framework::Behavior) implementation for [`FactorWorker`]
//! - [`messages`] - [`WorkerCast`], [`WorkerCall`], [`WorkerReply`]
//! - [`error`] - [`WorkerError`] type for type-safe error handling
//! - [`new()`] / [`spawn()`] - Factory functions that create the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use factor_pool::worker_actor::{self, WorkerArgs};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create actor and client
//!     let (server, client) = worker_actor::new("worker-0", Duration::from_secs(1));
//!
//!     // Start the actor (no shared primes)
//!     tokio::spawn(server.run(WorkerArgs::default()));
//!
//!     // Use the client
//!     client.factorize(99)?;
//!     assert_eq!(client.get_result(99).await?, vec![3, 3, 11]);
//!     Ok(())
//! }
//! ```

pub mod behavior;
pub mod error;
pub mod messages;

pub use behavior::*;
pub use error::*;
pub use messages::*;

use crate::clients::WorkerClient;
use crate::framework::{ActorConfig, ActorServer};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Creates a new worker actor and its client. The caller runs the server.
pub fn new(name: impl Into<String>, call_timeout: Duration) -> (ActorServer<FactorWorker>, WorkerClient) {
    let (server, actor) = ActorServer::new(ActorConfig::named(name));
    let client = WorkerClient::new(actor, call_timeout);

    (server, client)
}

/// Creates a worker and spawns it on the current runtime.
pub fn spawn(
    name: impl Into<String>,
    call_timeout: Duration,
    args: WorkerArgs,
) -> (WorkerClient, JoinHandle<FactorWorker>) {
    let (server, client) = new(name, call_timeout);
    let handle = tokio::spawn(server.run(args));

    (client, handle)
}
