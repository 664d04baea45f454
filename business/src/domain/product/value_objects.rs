use serde::{Deserialize, Serialize};

/// Fulfillment status of a listed product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    #[default]
    Placed,
    Dispatched,
    Cancelled,
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductStatus::Placed => write!(f, "Placed"),
            ProductStatus::Dispatched => write!(f, "Dispatched"),
            ProductStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Placed" => Ok(ProductStatus::Placed),
            "Dispatched" => Ok(ProductStatus::Dispatched),
            "Cancelled" => Ok(ProductStatus::Cancelled),
            _ => Err(format!("Invalid product status: {}", s)),
        }
    }
}
