use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDraft};

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, draft: ProductDraft) -> Result<Product, ProductError>;
}
