use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::currency::cache::CurrencyCache;
use crate::domain::currency::use_cases::refresh::RefreshCurrencyRateUseCase;
use crate::domain::logger::Logger;

pub struct RefreshCurrencyRateUseCaseImpl {
    pub cache: Arc<CurrencyCache>,
    pub logger: Arc<dyn Logger>,
    /// Resolved at configuration load; refresh is opt-in and defaults to off.
    pub enabled: bool,
}

#[async_trait]
impl RefreshCurrencyRateUseCase for RefreshCurrencyRateUseCaseImpl {
    async fn execute(&self) {
        self.logger.info("USD currency refresh started...");

        if !self.enabled {
            self.logger.info("USD currency refresh is disabled!");
            return;
        }

        if let Err(err) = self.cache.populate().await {
            self.logger
                .error(&format!("Error in populating USD currency rate: {}", err));
        }

        self.logger.info("USD currency refresh finished!");
    }
}
