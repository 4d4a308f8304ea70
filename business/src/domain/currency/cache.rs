use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::{BigDecimal, RoundingMode};
use tokio::sync::RwLock;

use crate::domain::logger::Logger;

use super::errors::CurrencyError;
use super::rate_source::UsdRateSource;

/// In-memory cache for the EUR to USD buying rate.
///
/// The slot starts empty and is filled either lazily by the first
/// [`get_rate`](CurrencyCache::get_rate) call or by the scheduled refresh
/// invoking [`populate`](CurrencyCache::populate). Concurrent populates race
/// benignly; the slot is a plain value overwrite and the last writer wins.
/// A failed populate leaves the previously cached value untouched.
pub struct CurrencyCache {
    rate_source: Arc<dyn UsdRateSource>,
    logger: Arc<dyn Logger>,
    rate: RwLock<Option<BigDecimal>>,
}

impl CurrencyCache {
    pub fn new(rate_source: Arc<dyn UsdRateSource>, logger: Arc<dyn Logger>) -> Self {
        Self {
            rate_source,
            logger,
            rate: RwLock::new(None),
        }
    }

    /// Returns the cached rate, populating it first when the cache is empty.
    pub async fn get_rate(&self) -> Result<BigDecimal, CurrencyError> {
        if let Some(rate) = self.rate.read().await.clone() {
            return Ok(rate);
        }

        self.logger.info("Currency cache is empty");
        self.populate().await?;

        self.rate
            .read()
            .await
            .clone()
            .ok_or(CurrencyError::RateNotFound)
    }

    /// Fetches the current rate from the source and overwrites the slot.
    pub async fn populate(&self) -> Result<(), CurrencyError> {
        self.logger.info("Populating USD currency rate...");

        let raw = self.rate_source.usd_buying_rate().await?;
        let rate = BigDecimal::from_str(&raw)
            .map_err(|_| CurrencyError::InvalidRate(raw))?
            .with_scale_round(2, RoundingMode::HalfUp);

        self.logger
            .info(&format!("Currency cache populated with rate {}", rate));

        *self.rate.write().await = Some(rate);

        Ok(())
    }
}
