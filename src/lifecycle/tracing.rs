//! # Observability & Tracing
//!
//! This module provides the tracing setup for the whole crate.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Every actor logs with an `actor` field carrying its name (`worker-0`, `worker-1`, ...),
//! so the lines of one worker can be filtered out of an interleaved run.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`) and shows spans
//! inline. Levels come from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: start, stop requests, shutdown with the number of messages processed
//! - **Messages**: every cast and call at `debug`, with the request payload
//! - **Dispatch**: submission and collection spans with item counts
//! - **Failures**: timed-out calls and dropped items at `warn`, each with the item number
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle and failures only
//! RUST_LOG=info cargo test
//!
//! # Every message
//! RUST_LOG=debug cargo test
//!
//! # Filter to the runtime
//! RUST_LOG=factor_pool::framework=debug cargo test
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`** (compact):
//!
//! ```text
//! INFO Pool started size=2 shared_primes=true
//! INFO Actor started actor="worker-0"
//! INFO Actor started actor="worker-1"
//! INFO Shutting down pool... size=2
//! INFO Shutdown actor="worker-0" processed=6
//! INFO Shutdown actor="worker-1" processed=4
//! INFO Pool shutdown complete.
//! INFO Batch complete items=5 completed=5 failed=0
//! ```
//!
//! Calling [`setup_tracing`] more than once is harmless; only the first call installs the
//! subscriber.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - the actor field says who is talking
        .compact()
        .try_init();
}
