//! Type-safe wrappers around [`Actor`](crate::framework::Actor).

pub mod actor_client;
pub mod worker_client;

pub use actor_client::*;
pub use worker_client::*;
