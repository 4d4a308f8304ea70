use async_trait::async_trait;

use super::errors::CurrencyError;

/// External source of the EUR to USD buying rate.
///
/// Implementations return the rate as a standard decimal string; any
/// locale-specific rendering from the upstream is normalized at this
/// boundary, never downstream.
#[async_trait]
pub trait UsdRateSource: Send + Sync {
    async fn usd_buying_rate(&self) -> Result<String, CurrencyError>;
}
