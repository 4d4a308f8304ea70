#[derive(Debug, thiserror::Error)]
pub enum CurrencyError {
    #[error("Unable to get currency rate for USD")]
    RateNotFound,
    #[error("Hnb api error")]
    Upstream { status: u16, body: String },
    #[error("Hnb api error")]
    Http(String),
    #[error("invalid exchange rate value: {0}")]
    InvalidRate(String),
}
