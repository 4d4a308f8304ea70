use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub price_eur: BigDecimal,
    pub description: Option<String>,
    pub is_available: bool,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.code,
            self.name,
            self.price_eur,
            self.description,
            self.is_available,
        )
    }
}
