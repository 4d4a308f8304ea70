use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductDraft};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns one page of products sorted by id ascending. When `name` is
    /// present the page is restricted to case-insensitive substring matches.
    async fn list(
        &self,
        page: u32,
        size: u32,
        name: Option<String>,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    /// Persists a draft and returns the stored product with its assigned id.
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;
    async fn update(&self, id: i64, draft: &ProductDraft) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
