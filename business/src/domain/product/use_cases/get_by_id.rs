use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::user::model::User;

pub struct GetProductByIdParams {
    pub id: Uuid,
}

/// A product together with its vendor's profile.
///
/// `owner` is `None` when the vendor account no longer exists.
#[derive(Debug, Clone)]
pub struct ProductWithOwner {
    pub product: Product,
    pub owner: Option<User>,
}

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetProductByIdParams)
    -> Result<ProductWithOwner, ProductError>;
}
