use std::sync::Arc;

use bigdecimal::{BigDecimal, RoundingMode};

use super::cache::CurrencyCache;
use super::errors::CurrencyError;

/// Converts EUR prices to USD using the cached exchange rate.
pub struct PriceConverter {
    cache: Arc<CurrencyCache>,
}

impl PriceConverter {
    pub fn new(cache: Arc<CurrencyCache>) -> Self {
        Self { cache }
    }

    /// `price_eur * rate`, rounded to 2 decimal places, half-up.
    pub async fn to_usd(&self, price_eur: &BigDecimal) -> Result<BigDecimal, CurrencyError> {
        let rate = self.cache.get_rate().await?;
        Ok((price_eur * rate).with_scale_round(2, RoundingMode::HalfUp))
    }
}
