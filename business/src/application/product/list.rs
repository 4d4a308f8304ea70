use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Fetching products for page {}, size {}, name {:?}...",
            params.page, params.size, params.name
        ));

        let products = self
            .repository
            .list(params.page, params.size, params.name)
            .await?;

        self.logger
            .info(&format!("Fetched {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::ProductDraft;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use mockall::predicate::eq;
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

    fn sample_product(id: i64, name: &str) -> Product {
        Product::from_repository(
            id,
            format!("CODE{:06}", id),
            name.to_string(),
            BigDecimal::from_str("9.99").unwrap(),
            None,
            true,
        )
    }

    #[tokio::test]
    async fn should_return_page_sorted_by_id_ascending() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_list()
            .with(eq(0), eq(10), eq(None::<String>))
            .returning(|_, _, _| {
                Ok(vec![
                    sample_product(1, "Olive Oil"),
                    sample_product(2, "Tomatoes"),
                ])
            });

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListProductsParams {
                page: 0,
                size: 10,
                name: None,
            })
            .await;

        assert!(result.is_ok());
        let products = result.unwrap();
        assert_eq!(products.len(), 2);
        assert!(products[0].id < products[1].id);
    }

    #[tokio::test]
    async fn should_pass_name_filter_to_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_list()
            .with(eq(0), eq(10), eq(Some("oil".to_string())))
            .times(1)
            .returning(|_, _, _| Ok(vec![sample_product(1, "Olive Oil")]));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListProductsParams {
                page: 0,
                size: 10,
                name: Some("oil".to_string()),
            })
            .await;

        assert_eq!(result.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_propagate_repository_errors() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_list()
            .returning(|_, _, _| Err(RepositoryError::DatabaseError));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListProductsParams {
                page: 0,
                size: 10,
                name: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
