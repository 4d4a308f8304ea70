use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::event::model::ProductEvent;
use crate::domain::event::publisher::EventPublisher;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub publisher: Arc<dyn EventPublisher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product with id {}...", params.id));

        // Verify product exists; all mutable fields are overwritten.
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => ProductError::NotFound(params.id),
                other => other.into(),
            })?;

        let product = self.repository.update(params.id, &params.draft).await?;

        let event = ProductEvent::updated(&product);
        if let Err(err) = self.publisher.publish(&event).await {
            self.logger.error(&format!(
                "Failed to publish updated event for product {}: {}",
                product.id, err
            ));
        }

        self.logger
            .info(&format!("Product updated with id {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::errors::PublishError;
    use crate::domain::event::model::EventAction;
    use crate::domain::product::model::ProductDraft;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use mockall::predicate::function;
    use std::str::FromStr;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn list(&self, page: u32, size: u32, name: Option<String>) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
            async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;
            async fn update(&self, id: i64, draft: &ProductDraft) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Publisher {}

        #[async_trait]
        impl EventPublisher for Publisher {
            async fn publish(&self, event: &ProductEvent) -> Result<(), PublishError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn sample_draft(name: &str) -> ProductDraft {
        ProductDraft::new(
            "ABCDEFGHIJ".to_string(),
            name.to_string(),
            BigDecimal::from_str("25.99").unwrap(),
            None,
            true,
        )
        .unwrap()
    }

    fn stored(draft: &ProductDraft, id: i64) -> Product {
        Product::from_repository(
            id,
            draft.code.clone(),
            draft.name.clone(),
            draft.price_eur.clone(),
            draft.description.clone(),
            draft.is_available,
        )
    }

    #[tokio::test]
    async fn should_update_and_publish_exactly_one_updated_event() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored(&sample_draft("Old Name"), id)));
        mock_repo
            .expect_update()
            .returning(|id, draft| Ok(stored(draft, id)));

        let mut mock_publisher = MockPublisher::new();
        mock_publisher
            .expect_publish()
            .with(function(|event: &ProductEvent| {
                event.action == EventAction::Update && event.key() == "42"
            }))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            publisher: Arc::new(mock_publisher),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 42,
                draft: sample_draft("New Name"),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().name, "New Name");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_update().never();

        let mut mock_publisher = MockPublisher::new();
        mock_publisher.expect_publish().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            publisher: Arc::new(mock_publisher),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 99,
                draft: sample_draft("Anything"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound(99)));
    }

    #[tokio::test]
    async fn should_return_conflict_when_code_collides_with_another_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored(&sample_draft("Existing"), id)));
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::Duplicated));

        let mut mock_publisher = MockPublisher::new();
        mock_publisher.expect_publish().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            publisher: Arc::new(mock_publisher),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 42,
                draft: sample_draft("Colliding"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Conflict));
    }

    #[tokio::test]
    async fn should_succeed_even_when_publish_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored(&sample_draft("Old"), id)));
        mock_repo
            .expect_update()
            .returning(|id, draft| Ok(stored(draft, id)));

        let mut mock_publisher = MockPublisher::new();
        mock_publisher
            .expect_publish()
            .times(1)
            .returning(|_| Err(PublishError::Transport("broker down".to_string())));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            publisher: Arc::new(mock_publisher),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 42,
                draft: sample_draft("New"),
            })
            .await;

        assert!(result.is_ok());
    }
}
