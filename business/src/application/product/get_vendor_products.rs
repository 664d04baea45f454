use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_vendor_products::{
    GetVendorProductsParams, GetVendorProductsUseCase,
};

pub struct GetVendorProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetVendorProductsUseCase for GetVendorProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetVendorProductsParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Getting {} products of vendor {}",
            params.listing, params.user_id
        ));

        let filter = params.listing.filter(params.user_id);
        let products = self.repository.find(&filter).await?;

        self.logger
            .info(&format!("Retrieved {} products", products.len()));
        Ok(products)
    }
}
