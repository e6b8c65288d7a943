//! Pool lifecycle and observability.
//!
//! - **Actor lifecycle management**: Starting, addressing, and shutting down pool workers
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`WorkerPool`] - Fixed-size round-robin pool of factorization workers
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure
//!
//! # Teardown
//!
//! A pool lives for exactly one batch. [`WorkerPool::shutdown`] sends each worker a stop
//! request, which it handles after everything already queued, then awaits the worker tasks.
//! A pool that is simply dropped shuts down too: once the last handle to a worker is gone its
//! mailbox closes and the loop exits.

pub mod tracing;
pub mod worker_pool;

pub use self::tracing::setup_tracing;
pub use self::worker_pool::*;
