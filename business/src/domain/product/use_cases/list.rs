use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Page and size are bounds-checked at the HTTP boundary before they reach
/// this use case (0 <= page <= 100, 1 <= size <= 100).
pub struct ListProductsParams {
    pub page: u32,
    pub size: u32,
    pub name: Option<String>,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<Vec<Product>, ProductError>;
}
