use std::env;

/// Configuration for the NATS event publisher
#[derive(Debug, Clone)]
pub struct MessagingConfig {
    pub nats_url: String,
    pub products_topic: String,
}

impl MessagingConfig {
    /// Load messaging configuration from environment variables
    ///
    /// Environment variables:
    /// - NATS_URL: NATS server address (default: "nats://127.0.0.1:4222")
    /// - PRODUCTS_TOPIC: Topic product events are published to (default: "products")
    pub fn from_env() -> Self {
        let nats_url =
            env::var("NATS_URL").unwrap_or_else(|_| "nats://127.0.0.1:4222".to_string());
        let products_topic = env::var("PRODUCTS_TOPIC").unwrap_or_else(|_| "products".to_string());

        Self {
            nats_url,
            products_topic,
        }
    }
}
