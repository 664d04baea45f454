use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewReviewProps, Review};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::add_review::{AddReviewParams, AddReviewUseCase};

pub struct AddReviewUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddReviewUseCase for AddReviewUseCaseImpl {
    async fn execute(&self, params: AddReviewParams) -> Result<(), ProductError> {
        self.logger.info(&format!(
            "Adding review to product {} by user {}",
            params.product_id, params.user_id
        ));

        let mut product = self
            .repository
            .get_by_id(params.product_id)
            .await
            .map_err(ProductError::from_lookup)?;

        let review = Review::new(NewReviewProps {
            user_id: params.user_id,
            name: params.user_name,
            rating: params.rating,
            comment: params.comment,
        });

        if let Err(err) = product.add_review(review) {
            self.logger.warn(&format!(
                "Product {} already reviewed by this user",
                params.product_id
            ));
            return Err(err);
        }

        self.repository.save(&product).await?;

        self.logger.info(&format!(
            "Review added to product {} ({} reviews, rating {:.2})",
            product.id, product.num_reviews, product.rating
        ));
        Ok(())
    }
}
