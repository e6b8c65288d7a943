//! # Actor Handle
//!
//! This module defines [`Actor`], the address callers use to reach a running actor.

use crate::framework::actor::{ActorConfig, ActorServer};
use crate::framework::behavior::Behavior;
use crate::framework::error::FrameworkError;
use crate::framework::message::Envelope;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::warn;

/// A type-safe handle for messaging an actor running behavior `B`.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Cast** – enqueue and return immediately, no acknowledgement.
/// * **Call** – enqueue with a fresh reply channel and wait, bounded by a timeout.
pub struct Actor<B: Behavior> {
    sender: mpsc::UnboundedSender<Envelope<B>>,
    name: Arc<str>,
}

impl<B: Behavior> Clone for Actor<B> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            name: Arc::clone(&self.name),
        }
    }
}

impl<B: Behavior> std::fmt::Debug for Actor<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Actor")
            .field("name", &self.name)
            .field("alive", &self.is_alive())
            .finish()
    }
}

impl<B: Behavior> Actor<B> {
    pub(crate) fn from_parts(sender: mpsc::UnboundedSender<Envelope<B>>, name: &str) -> Self {
        Self {
            sender,
            name: Arc::from(name),
        }
    }

    /// Starts a new actor on the current Tokio runtime and returns its address.
    ///
    /// Returns before `B::init` has necessarily run; it is only guaranteed to finish before
    /// the first message is handled.
    pub fn start(args: B::Args) -> Self {
        Self::start_with(args, ActorConfig::default())
    }

    /// Like [`Actor::start`], with explicit settings.
    pub fn start_with(args: B::Args, config: ActorConfig) -> Self {
        let (actor, _handle) = Self::spawn(args, config);
        actor
    }

    /// Starts an actor and also returns its task handle, which yields the final state once
    /// the actor stops.
    pub fn spawn(args: B::Args, config: ActorConfig) -> (Self, JoinHandle<B>) {
        let (server, actor) = ActorServer::new(config);
        let handle = tokio::spawn(server.run(args));
        (actor, handle)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true while the actor's mailbox is open.
    pub fn is_alive(&self) -> bool {
        !self.sender.is_closed()
    }

    /// Sends a fire-and-forget request. Never waits.
    ///
    /// # Errors
    /// `FrameworkError::ActorClosed` if the actor has stopped.
    pub fn cast(&self, request: B::Cast) -> Result<(), FrameworkError> {
        self.sender
            .send(Envelope::Cast(request))
            .map_err(|_| FrameworkError::ActorClosed)
    }

    /// Sends a request and waits up to `timeout` for its reply.
    ///
    /// A timeout only stops *this* caller from waiting. The actor still handles the request
    /// and its reply is discarded.
    ///
    /// # Errors
    /// - `FrameworkError::ActorClosed` if the actor has stopped.
    /// - `FrameworkError::ActorDropped` if the actor dropped the reply channel.
    /// - `FrameworkError::Timeout` if no reply arrived in time.
    pub async fn call(&self, request: B::Call, timeout: Duration) -> Result<B::Reply, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(Envelope::Call {
                request,
                respond_to,
            })
            .map_err(|_| FrameworkError::ActorClosed)?;

        match tokio::time::timeout(timeout, response).await {
            Ok(reply) => reply.map_err(|_| FrameworkError::ActorDropped),
            Err(_) => {
                warn!(actor = %self.name, ?timeout, "Call timed out");
                Err(FrameworkError::Timeout(timeout))
            }
        }
    }

    /// Asks the actor to stop after everything already queued.
    pub fn stop(&self) -> Result<(), FrameworkError> {
        self.sender
            .send(Envelope::Stop)
            .map_err(|_| FrameworkError::ActorClosed)
    }
}
