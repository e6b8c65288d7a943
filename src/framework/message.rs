//! # Mailbox Messages
//!
//! This module defines the envelope type carried on an actor's mailbox.

use crate::framework::behavior::Behavior;
use tokio::sync::oneshot;

/// Type alias for the one-shot reply channel attached to a call.
pub type ReplyTo<T> = oneshot::Sender<T>;

/// A message sitting in an actor's mailbox.
///
/// Casts and calls share the same queue and are processed in arrival order; there is no
/// priority between them. Each call carries its own reply channel, so the reply needs no
/// correlation id.
#[derive(Debug)]
pub enum Envelope<B: Behavior> {
    /// Fire-and-forget request.
    Cast(B::Cast),
    /// Request that expects exactly one reply on `respond_to`.
    Call {
        request: B::Call,
        respond_to: ReplyTo<B::Reply>,
    },
    /// Ends the loop once everything queued ahead of it has been processed.
    Stop,
}
