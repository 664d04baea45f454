use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::ownership::MutationPolicy;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub policy: MutationPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Cancelling product: {}", params.id));

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_lookup)?;

        if let Err(err) = self.policy.authorize(&params.user_id, &product) {
            if let ProductError::NotFound { reason } = &err {
                self.logger.warn(&format!(
                    "Cancellation of product {} refused for user {} ({})",
                    params.id, params.user_id, reason
                ));
            }
            return Err(err);
        }

        product.cancel();
        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product cancelled: {}", params.id));
        Ok(())
    }
}
