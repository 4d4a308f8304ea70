use async_trait::async_trait;
use serde::Deserialize;

use business::domain::currency::errors::CurrencyError;
use business::domain::currency::rate_source::UsdRateSource;

use crate::client::HnbApiClient;

/// State token identifying the United States record in the HNB rate list.
const USA_STATE_TOKEN: &str = "SAD";

/// One entry of the HNB exchange rate list. The upstream renders rates with
/// a comma as the decimal separator.
#[derive(Debug, Deserialize)]
pub struct ExchangeRateRecord {
    #[serde(rename = "drzava")]
    pub state: String,
    #[serde(rename = "kupovni_tecaj")]
    pub buying_rate: String,
}

/// Selects the United States record and normalizes its locale-specific
/// decimal rendering, so the rest of the system only sees standard decimals.
fn select_usd_rate(records: Vec<ExchangeRateRecord>) -> Option<String> {
    records
        .into_iter()
        .find(|record| record.state == USA_STATE_TOKEN)
        .map(|record| record.buying_rate.replace(',', "."))
}

#[async_trait]
impl UsdRateSource for HnbApiClient {
    async fn usd_buying_rate(&self) -> Result<String, CurrencyError> {
        let response = self
            .client
            .get(&self.currency_usd_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| CurrencyError::Http(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CurrencyError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let records: Vec<ExchangeRateRecord> = response
            .json()
            .await
            .map_err(|err| CurrencyError::Http(err.to_string()))?;

        select_usd_rate(records).ok_or(CurrencyError::RateNotFound)
    }
}
