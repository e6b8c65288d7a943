//! # Generic Actor Server
//!
//! This module defines the `ActorServer`, the "Server" half of an actor. It owns the receiving
//! end of the mailbox and, once running, the behavior state. Messages are processed
//! sequentially, so the state never needs a lock.

use crate::framework::behavior::Behavior;
use crate::framework::client::Actor;
use crate::framework::message::Envelope;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Settings for a single actor.
#[derive(Debug, Clone, Default)]
pub struct ActorConfig {
    /// Name used in log fields. Defaults to the behavior's type name.
    pub name: Option<String>,
}

impl ActorConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    fn resolve_name<B>(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            // Just the type name, e.g. "FactorWorker" rather than the full module path
            std::any::type_name::<B>()
                .split("::")
                .last()
                .unwrap_or("Unknown")
                .to_string()
        })
    }
}

/// The generic actor loop.
///
/// # Architecture Note
/// Even though a pool may run many `ActorServer` instances, each one processes its own
/// messages *sequentially*. The behavior state is a local of [`ActorServer::run`] and is
/// never reachable from outside the task; the only way in is the mailbox.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ActorServer::new()` to get the `server` and the `Actor` handle.
/// 2.  **Wire**: Pass the behavior's init arguments into `server.run(args)`.
/// 3.  **Run**: Spawn the returned future in a background task.
///
/// ```rust
/// use async_trait::async_trait;
/// use factor_pool::framework::{ActorConfig, ActorServer, Behavior};
/// use std::time::Duration;
///
/// struct Counter(u64);
///
/// #[async_trait]
/// impl Behavior for Counter {
///     type Args = u64;
///     type Cast = u64;
///     type Call = ();
///     type Reply = u64;
///
///     fn init(start: u64) -> Self { Counter(start) }
///     async fn handle_cast(&mut self, by: u64) { self.0 += by; }
///     async fn handle_call(&mut self, _: ()) -> u64 { self.0 }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (server, actor) = ActorServer::<Counter>::new(ActorConfig::named("counter"));
///     tokio::spawn(server.run(10));
///
///     actor.cast(5).unwrap();
///     let total = actor.call((), Duration::from_secs(1)).await.unwrap();
///     assert_eq!(total, 15);
/// }
/// ```
pub struct ActorServer<B: Behavior> {
    receiver: mpsc::UnboundedReceiver<Envelope<B>>,
    name: String,
}

impl<B: Behavior> ActorServer<B> {
    /// Creates a new `ActorServer` and the `Actor` handle that feeds its mailbox.
    ///
    /// The mailbox is unbounded: a cast never waits for the actor to catch up.
    pub fn new(config: ActorConfig) -> (Self, Actor<B>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let name = config.resolve_name::<B>();
        let actor = Actor::from_parts(sender, &name);
        let server = Self { receiver, name };
        (server, actor)
    }

    /// Runs the actor's event loop until it is stopped or every handle is dropped.
    ///
    /// `B::init(args)` runs first, inside the task, so initialization overlaps with whatever
    /// the spawning code does next. Returns the final state.
    pub async fn run(mut self, args: B::Args) -> B {
        let actor = self.name.as_str();
        let mut state = B::init(args);
        info!(actor, "Actor started");

        let mut processed: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                Envelope::Cast(request) => {
                    debug!(actor, ?request, "Cast");
                    state.handle_cast(request).await;
                }
                Envelope::Call {
                    request,
                    respond_to,
                } => {
                    debug!(actor, ?request, "Call");
                    let reply = state.handle_call(request).await;
                    if respond_to.send(reply).is_err() {
                        // The caller timed out or went away; the late reply is dropped.
                        debug!(actor, "Caller gone, reply discarded");
                    }
                }
                Envelope::Stop => {
                    debug!(actor, "Stop requested");
                    break;
                }
            }
            processed += 1;
        }

        state.on_stop().await;
        info!(actor, processed, "Shutdown");
        state
    }
}
