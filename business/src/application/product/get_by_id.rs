use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase, ProductWithOwner,
};
use crate::domain::user::repository::UserRepository;

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductByIdParams,
    ) -> Result<ProductWithOwner, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_lookup)?;

        let owner = match self.user_repository.get_by_id(&product.user_id).await {
            Ok(user) => Some(user),
            Err(RepositoryError::NotFound) => {
                self.logger.debug(&format!(
                    "Owner {} of product {} no longer exists",
                    product.user_id, product.id
                ));
                None
            }
            Err(other) => return Err(ProductError::Repository(other)),
        };

        Ok(ProductWithOwner { product, owner })
    }
}
