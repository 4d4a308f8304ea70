use async_trait::async_trait;

use super::errors::PublishError;
use super::model::ProductEvent;

/// Sink for product domain events.
///
/// Publishing is best-effort from the caller's point of view: use cases log
/// a failed publish and keep the already-committed store mutation.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: &ProductEvent) -> Result<(), PublishError>;
}
