use std::env;

/// Configuration for the HNB exchange rate API client
#[derive(Debug, Clone)]
pub struct HnbConfig {
    pub currency_usd_url: String,
}

impl HnbConfig {
    /// Load HNB client configuration from environment variables
    ///
    /// Environment variables:
    /// - HNB_CURRENCY_USD_URL: Rate list endpoint filtered to USD
    pub fn from_env() -> Self {
        let currency_usd_url = env::var("HNB_CURRENCY_USD_URL")
            .unwrap_or_else(|_| "https://api.hnb.hr/tecajn/v1?valuta=USD".to_string());

        Self { currency_usd_url }
    }
}
