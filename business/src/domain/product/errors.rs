use crate::domain::currency::errors::CurrencyError;
use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("attribute code must be exactly 10 characters")]
    CodeLength,
    #[error("attribute name must not be blank")]
    NameEmpty,
    #[error("attribute priceEur must be positive number")]
    PriceNegative,
    #[error("Could not find product by this id {0}")]
    NotFound(i64),
    #[error("Data integrity violation exception")]
    Conflict,
    #[error(transparent)]
    Currency(#[from] CurrencyError),
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ProductError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicated => ProductError::Conflict,
            other => ProductError::Repository(other),
        }
    }
}
