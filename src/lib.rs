//! # Factor Pool
//!
//! > **A worker pool of actors that factors batches of integers.**
//!
//! This crate builds a small generic actor runtime on Tokio and uses it to spread a batch of
//! prime factorizations over a fixed pool of workers. Each worker owns the results it computed;
//! the batch client asks the owner for each result once everything has been handed out.
//!
//! ## Core Concepts
//!
//! ### Behaviors
//! An actor is a task with a mailbox running a [`Behavior`](framework::Behavior). The behavior
//! value is the actor's state. Nothing outside the task can touch it; the only way in is a message.
//! - **Cast**: fire-and-forget. [`Actor::cast`](framework::Actor::cast) queues the request and returns.
//! - **Call**: request/response. [`Actor::call`](framework::Actor::call) waits for the reply, up to a timeout.
//!
//! Messages from one sender to one actor are handled in the order they were sent.
//!
//! ### Round-robin ownership
//! Item `i` of a batch goes to worker `i mod N` and stays there. The pool remembers the owner of
//! every item, and collecting a result means calling that worker and nobody else.
//!
//! ### Mocking
//! [`framework::mock`] provides actors with scripted replies, including ones that never answer,
//! so timeouts and missing results can be tested without slow inputs.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor runtime: message loop, handles, errors, mocks.
//! - **Key items**: [`Behavior`](framework::Behavior), [`Actor`](framework::Actor), [`ActorServer`](framework::ActorServer).
//!
//! ### 2. The Work ([`compute`], [`worker_actor`])
//! [`compute::factor()`] is the pure collaborator. [`worker_actor::FactorWorker`] wraps it in a
//! behavior that accumulates `n -> factors`.
//!
//! ### 3. The Interface ([`clients`])
//! [`WorkerClient`](clients::WorkerClient) hides the raw messages behind typed methods.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`WorkerPool`](lifecycle::WorkerPool) starts the workers, deals items out, collects results
//! and shuts the pool down. [`setup_tracing`](lifecycle::setup_tracing) installs the log subscriber.
//!
//! ### 5. The Entry Points ([`batch`], [`one_shot`])
//! [`batch::factorize`] runs a batch on a fresh pool. [`one_shot::factorize`] does the same work
//! with a blocking task per chunk and no actors.
//!
//! ## Quick Start
//!
//! ```rust
//! use factor_pool::{batch, config::PoolConfig, lifecycle::setup_tracing};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), batch::BatchError> {
//!     setup_tracing();
//!
//!     let config = PoolConfig::default().with_size(2);
//!     let results = batch::factorize(&[7, 10, 20, 30, 99], &config).await?;
//!
//!     assert_eq!(results[&20], vec![2, 2, 5]);
//!     assert_eq!(results.len(), 5);
//!     Ok(())
//! }
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! RUST_LOG=debug cargo test
//! ```

pub mod batch;
pub mod clients;
pub mod compute;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod one_shot;
pub mod worker_actor;
