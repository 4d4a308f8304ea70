#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("event.serialization")]
    Serialization(#[from] serde_json::Error),
    #[error("event.transport: {0}")]
    Transport(String),
}
