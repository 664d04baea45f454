use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::ProductFilter;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError> {
        let filter = ProductFilter::available(params.keyword);
        match &filter.keyword {
            Some(keyword) => self
                .logger
                .info(&format!("Getting available products matching '{}'", keyword)),
            None => self.logger.info("Getting available products"),
        }

        let products = self.repository.find(&filter).await?;

        self.logger
            .info(&format!("Retrieved {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::filter::StockCondition;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn find(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
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

    #[tokio::test]
    async fn should_query_products_in_stock() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find()
            .withf(|f| {
                f.stock == Some(StockCondition::InStock) && f.owner.is_none() && f.keyword.is_none()
            })
            .returning(|_| {
                Ok(vec![
                    Product::new(UserId::new("vendor-a")),
                    Product::new(UserId::new("vendor-b")),
                ])
            });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllProductsParams { keyword: None })
            .await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_pass_keyword_to_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find()
            .withf(|f| f.keyword.as_deref() == Some("widget"))
            .returning(|_| Ok(vec![]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllProductsParams {
                keyword: Some("widget".to_string()),
            })
            .await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllProductsParams { keyword: None })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
