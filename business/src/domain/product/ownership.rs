use super::errors::ProductError;
use super::model::Product;
use crate::domain::shared::value_objects::UserId;

pub fn is_owner(acting_user: &UserId, product: &Product) -> bool {
    acting_user == &product.user_id
}

/// Per-operation authorization rule applied before a product is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationPolicy {
    pub requires_ownership: bool,
}

impl MutationPolicy {
    pub const OWNER_ONLY: Self = Self {
        requires_ownership: true,
    };
    pub const ANY_AUTHENTICATED: Self = Self {
        requires_ownership: false,
    };

    /// Rejects non-owners with the same error a missing product produces.
    pub fn authorize(&self, acting_user: &UserId, product: &Product) -> Result<(), ProductError> {
        if self.requires_ownership && !is_owner(acting_user, product) {
            return Err(ProductError::not_owner());
        }
        Ok(())
    }
}
