use bigdecimal::{BigDecimal, Zero};

use super::errors::ProductError;

/// Fixed length of the business product code.
pub const CODE_LENGTH: usize = 10;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub price_eur: BigDecimal,
    pub description: Option<String>,
    pub is_available: bool,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        code: String,
        name: String,
        price_eur: BigDecimal,
        description: Option<String>,
        is_available: bool,
    ) -> Self {
        Self {
            id,
            code,
            name,
            price_eur,
            description,
            is_available,
        }
    }
}

/// A product without an identity yet. The store assigns the id on insert.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub code: String,
    pub name: String,
    pub price_eur: BigDecimal,
    pub description: Option<String>,
    pub is_available: bool,
}

impl ProductDraft {
    pub fn new(
        code: String,
        name: String,
        price_eur: BigDecimal,
        description: Option<String>,
        is_available: bool,
    ) -> Result<Self, ProductError> {
        if code.chars().count() != CODE_LENGTH {
            return Err(ProductError::CodeLength);
        }

        if name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if price_eur < BigDecimal::zero() {
            return Err(ProductError::PriceNegative);
        }

        Ok(Self {
            code,
            name,
            price_eur,
            description,
            is_available,
        })
    }
}
