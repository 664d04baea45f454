use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::ownership::MutationPolicy;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub policy: MutationPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_lookup)?;

        if let Err(err) = self.policy.authorize(&params.user_id, &product) {
            if let ProductError::NotFound { reason } = &err {
                self.logger.warn(&format!(
                    "Update of product {} refused for user {} ({})",
                    params.id, params.user_id, reason
                ));
            }
            return Err(err);
        }

        product.apply_details(params.details);
        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
