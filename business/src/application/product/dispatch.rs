use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::ownership::MutationPolicy;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::dispatch::{DispatchProductParams, DispatchProductUseCase};

/// Marks a product as dispatched.
///
/// Unlike the other mutations this one is wired with
/// `MutationPolicy::ANY_AUTHENTICATED` by default, so any signed-in user may
/// dispatch any product. Whether that should be tightened is a product decision.
pub struct DispatchProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub policy: MutationPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DispatchProductUseCase for DispatchProductUseCaseImpl {
    async fn execute(&self, params: DispatchProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Dispatching product: {}", params.id));

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_lookup)?;

        if let Err(err) = self.policy.authorize(&params.user_id, &product) {
            if let ProductError::NotFound { reason } = &err {
                self.logger.warn(&format!(
                    "Dispatch of product {} refused for user {} ({})",
                    params.id, params.user_id, reason
                ));
            }
            return Err(err);
        }

        product.dispatch();
        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product dispatched: {}", product.id));
        Ok(product)
    }
}
