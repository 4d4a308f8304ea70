use async_trait::async_trait;

/// Scheduled refresh of the cached USD rate.
///
/// Infallible by contract: a failed refresh is logged and absorbed so the
/// schedule always reaches its next tick.
#[async_trait]
pub trait RefreshCurrencyRateUseCase: Send + Sync {
    async fn execute(&self);
}
