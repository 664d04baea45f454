use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::ProductFilter;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

/// The fulfillment views a vendor has over their own listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorListing {
    Waitlisted,
    DispatchReady,
    Dispatched,
}

impl VendorListing {
    pub fn filter(self, owner: UserId) -> ProductFilter {
        match self {
            VendorListing::Waitlisted => ProductFilter::waitlisted(owner),
            VendorListing::DispatchReady => ProductFilter::dispatch_ready(owner),
            VendorListing::Dispatched => ProductFilter::dispatched(owner),
        }
    }
}

impl std::fmt::Display for VendorListing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VendorListing::Waitlisted => write!(f, "waitlisted"),
            VendorListing::DispatchReady => write!(f, "dispatch_ready"),
            VendorListing::Dispatched => write!(f, "dispatched"),
        }
    }
}

pub struct GetVendorProductsParams {
    pub user_id: UserId,
    pub listing: VendorListing,
}

#[async_trait]
pub trait GetVendorProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetVendorProductsParams)
    -> Result<Vec<Product>, ProductError>;
}
