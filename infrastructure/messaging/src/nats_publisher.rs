use async_trait::async_trait;
use tracing::debug;

use business::domain::event::errors::PublishError;
use business::domain::event::model::ProductEvent;
use business::domain::event::publisher::EventPublisher;

/// Publishes product events to NATS.
///
/// Each event goes to `<topic>.<product-id>`, so the product id keys the
/// message and consumers can subscribe to the whole topic or a single
/// product with a wildcard.
pub struct NatsEventPublisher {
    client: async_nats::Client,
    topic: String,
}

impl NatsEventPublisher {
    pub fn new(client: async_nats::Client, topic: String) -> Self {
        Self { client, topic }
    }
}

fn subject(topic: &str, key: &str) -> String {
    format!("{}.{}", topic, key)
}

#[async_trait]
impl EventPublisher for NatsEventPublisher {
    async fn publish(&self, event: &ProductEvent) -> Result<(), PublishError> {
        let subject = subject(&self.topic, &event.key());
        let payload = serde_json::to_vec(event)?;

        debug!(target: "Catalog -- ", "Publishing {:?} event to {}", event.action, subject);

        self.client
            .publish(subject, payload.into())
            .await
            .map_err(|err| PublishError::Transport(err.to_string()))?;
        self.client
            .flush()
            .await
            .map_err(|err| PublishError::Transport(err.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_key_subject_by_product_id() {
        let event = ProductEvent::deleted(42);

        assert_eq!(subject("products", &event.key()), "products.42");
    }
}
