//! # Behavior Trait
//!
//! The `Behavior` trait is the callback contract an actor's logic implements. The generic
//! [`ActorServer`](crate::framework::ActorServer) owns the message loop; the behavior only
//! says how state is built and how each kind of message changes it.
//!
//! # Architecture Note
//! The contract has exactly three entry points:
//! - [`Behavior::init`] builds the initial state inside the actor's task.
//! - [`Behavior::handle_cast`] reacts to a fire-and-forget request.
//! - [`Behavior::handle_call`] reacts to a request and produces exactly one reply.
//!
//! The implementing type *is* the state. Handlers take `&mut self`, so the only code that can
//! touch it is the actor loop that owns the value.
//!
//! We use "Associated Types" for the request and reply types. A worker that expects
//! `WorkerCast` can't be sent a message meant for some other actor; the compiler rejects it.

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any actor logic must implement to be driven by an [`ActorServer`](crate::framework::ActorServer).
///
/// # Async Handlers
/// Handlers are `#[async_trait]` so a behavior can await inside a handler (for example to push
/// CPU-bound work onto the blocking pool). The loop awaits the handler to completion before it
/// takes the next message, so processing stays one-at-a-time.
#[async_trait]
pub trait Behavior: Send + Sized + 'static {
    /// Arguments handed to [`Behavior::init`] when the actor task starts.
    /// Use `()` if the behavior needs nothing.
    type Args: Send + 'static;

    /// Fire-and-forget requests.
    type Cast: Send + Debug + 'static;

    /// Requests that expect a reply.
    type Call: Send + Debug + 'static;

    /// The reply produced for every [`Behavior::Call`].
    ///
    /// Domain failures (such as "no result yet") belong in this type as ordinary values;
    /// they are never actor crashes.
    type Reply: Send + Debug + 'static;

    /// Builds the initial state. Runs exactly once, inside the actor's task, before any
    /// message is processed.
    fn init(args: Self::Args) -> Self;

    /// Handles an asynchronous notification. No reply is produced.
    async fn handle_cast(&mut self, request: Self::Cast);

    /// Handles a synchronous request. The returned value is sent back to the caller.
    async fn handle_call(&mut self, request: Self::Call) -> Self::Reply;

    /// Called once after the loop exits, before the final state is handed back.
    async fn on_stop(&mut self) {}
}
