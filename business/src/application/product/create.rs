use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::event::model::ProductEvent;
use crate::domain::event::publisher::EventPublisher;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDraft};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::CreateProductUseCase;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub publisher: Arc<dyn EventPublisher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product with code {}...", draft.code));

        let product = self.repository.insert(&draft).await?;

        let event = ProductEvent::created(&product);
        if let Err(err) = self.publisher.publish(&event).await {
            self.logger.error(&format!(
                "Failed to publish created event for product {}: {}",
                product.id, err
            ));
        }

        self.logger
            .info(&format!("Product created with id {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::event::errors::PublishError;
    use crate::domain::event::model::EventAction;
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

    fn sample_draft() -> ProductDraft {
        ProductDraft::new(
            "ABCDEFGHIJ".to_string(),
            "Olive Oil".to_string(),
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
    async fn should_persist_and_publish_exactly_one_created_event() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .returning(|draft| Ok(stored(draft, 42)));

        let mut mock_publisher = MockPublisher::new();
        mock_publisher
            .expect_publish()
            .with(function(|event: &ProductEvent| {
                event.action == EventAction::Create && event.key() == "42"
            }))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            publisher: Arc::new(mock_publisher),
            logger: mock_logger(),
        };

        let result = use_case.execute(sample_draft()).await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.id, 42);
        assert_eq!(product.code, "ABCDEFGHIJ");
    }

    #[tokio::test]
    async fn should_return_conflict_and_publish_nothing_on_duplicate_code() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::Duplicated));

        let mut mock_publisher = MockPublisher::new();
        mock_publisher.expect_publish().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            publisher: Arc::new(mock_publisher),
            logger: mock_logger(),
        };

        let result = use_case.execute(sample_draft()).await;

        assert!(matches!(result.unwrap_err(), ProductError::Conflict));
    }

    #[tokio::test]
    async fn should_succeed_even_when_publish_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .returning(|draft| Ok(stored(draft, 7)));

        let mut mock_publisher = MockPublisher::new();
        mock_publisher
            .expect_publish()
            .times(1)
            .returning(|_| Err(PublishError::Transport("broker down".to_string())));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            publisher: Arc::new(mock_publisher),
            logger: mock_logger(),
        };

        let result = use_case.execute(sample_draft()).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, 7);
    }
}
