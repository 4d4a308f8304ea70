pub mod nats_publisher;

pub use nats_publisher::NatsEventPublisher;
