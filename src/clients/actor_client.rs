use crate::framework::{Actor, Behavior, FrameworkError};
use async_trait::async_trait;
use std::time::Duration;

/// Trait for behavior-specific clients to inherit the raw messaging operations.
///
/// This trait reduces boilerplate by providing default implementations of
/// `notify`, `request` and `stop` that map framework errors to the client's own error type.
#[async_trait]
pub trait ActorClient<B: Behavior>: Send + Sync {
    /// The behavior-specific error type.
    type Error: Send + Sync;

    /// Access the inner actor handle.
    fn inner(&self) -> &Actor<B>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Cast a request to the actor.
    fn notify(&self, request: B::Cast) -> Result<(), Self::Error> {
        self.inner().cast(request).map_err(Self::map_error)
    }

    /// Call the actor and wait up to `timeout` for the reply.
    #[tracing::instrument(skip(self))]
    async fn request(&self, request: B::Call, timeout: Duration) -> Result<B::Reply, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .call(request, timeout)
            .await
            .map_err(Self::map_error)
    }

    /// Ask the actor to stop after its queued messages.
    fn stop(&self) -> Result<(), Self::Error> {
        self.inner().stop().map_err(Self::map_error)
    }
}
