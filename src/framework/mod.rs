//! Generic actor runtime.
//!
//! This module provides the building blocks for running any [`Behavior`] as an isolated,
//! concurrently scheduled actor that is reachable only through its mailbox.
//!
//! # Main Components
//!
//! - [`Behavior`] - The init / handle_cast / handle_call contract an actor's logic implements
//! - [`ActorServer`] - The message loop that owns the behavior state
//! - [`Actor`] - Cloneable address with `cast`, `call` (with timeout) and `stop`
//! - [`FrameworkError`] - Runtime errors (closed mailbox, dropped reply, timeout)
//!
//! # Testing
//!
//! See [`mock`] module for stand-in actors with scripted replies.

pub mod actor;
pub mod behavior;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::{ActorConfig, ActorServer};
pub use behavior::Behavior;
pub use client::Actor;
pub use error::FrameworkError;
pub use message::{Envelope, ReplyTo};
