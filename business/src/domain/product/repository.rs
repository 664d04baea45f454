use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::filter::ProductFilter;
use super::model::Product;

/// Document-style product store.
///
/// `save` replaces the whole stored document; there is no version check, so
/// concurrent writers to the same product resolve as last write wins.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
}
