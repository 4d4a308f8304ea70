use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::event::model::ProductEvent;
use crate::domain::event::publisher::EventPublisher;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub publisher: Arc<dyn EventPublisher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Removing product with id {}...", params.id));

        // Verify product exists before deleting
        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => ProductError::NotFound(params.id),
                other => other.into(),
            })?;

        self.repository.delete(product.id).await?;

        let event = ProductEvent::deleted(product.id);
        if let Err(err) = self.publisher.publish(&event).await {
            self.logger.error(&format!(
                "Failed to publish deleted event for product {}: {}",
                product.id, err
            ));
        }

        self.logger
            .info(&format!("Product removed with id {}", product.id));
        Ok(())
    }
}
