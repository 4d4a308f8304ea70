use reqwest::Client;

/// Shared HNB exchange rate API client configuration.
pub struct HnbApiClient {
    pub client: Client,
    pub currency_usd_url: String,
}

impl HnbApiClient {
    pub fn new(currency_usd_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            currency_usd_url,
        }
    }
}
