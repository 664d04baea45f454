use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object, types::MaybeUndefined};
use serde::{Deserialize, Serialize};

use business::domain::product::model::{Product, ProductDetails, Review};
use business::domain::product::use_cases::get_by_id::ProductWithOwner;
use business::domain::product::value_objects::ProductStatus;
use business::domain::user::model::User;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum ProductStatusDto {
    Placed,
    Dispatched,
    Cancelled,
}

impl From<ProductStatus> for ProductStatusDto {
    fn from(status: ProductStatus) -> Self {
        match status {
            ProductStatus::Placed => ProductStatusDto::Placed,
            ProductStatus::Dispatched => ProductStatusDto::Dispatched,
            ProductStatus::Cancelled => ProductStatusDto::Cancelled,
        }
    }
}

/// Full replacement of a product's editable fields.
///
/// Every field left out of the body is cleared on the stored product.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    /// Product name
    pub name: Option<String>,
    /// Unit price
    pub price: Option<f64>,
    /// Image path or URL
    pub image: Option<String>,
    /// Units per lot
    pub bundle_quantity: Option<i64>,
    /// Units still available
    pub remaining_quantity: Option<i64>,
}

impl From<UpdateProductRequest> for ProductDetails {
    fn from(request: UpdateProductRequest) -> Self {
        Self {
            name: request.name,
            price: request.price,
            image: request.image,
            bundle_quantity: request.bundle_quantity,
            remaining_quantity: request.remaining_quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateReviewRequest {
    /// Rating, usually 1 to 5. Numeric strings are accepted.
    pub rating: MaybeUndefined<serde_json::Value>,
    /// Free-text comment
    pub comment: Option<String>,
}

impl CreateReviewRequest {
    /// An absent `rating` key has no numeric value, unlike an explicit null.
    pub fn numeric_rating(&self) -> Option<f64> {
        match &self.rating {
            MaybeUndefined::Undefined => None,
            MaybeUndefined::Null => coerce_rating(&serde_json::Value::Null),
            MaybeUndefined::Value(value) => coerce_rating(value),
        }
    }
}

/// Coerces a loosely typed rating into a number.
///
/// Numbers pass through, numeric strings are parsed (blank counts as 0),
/// booleans become 1 or 0 and null becomes 0. Anything else, or a
/// non-finite result, yields `None`.
pub fn coerce_rating(value: &serde_json::Value) -> Option<f64> {
    let rating = match value {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) if s.trim().is_empty() => 0.0,
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        serde_json::Value::Bool(b) => f64::from(u8::from(*b)),
        serde_json::Value::Null => 0.0,
        _ => return None,
    };
    rating.is_finite().then_some(rating)
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ReviewResponse {
    /// Reviewer display name
    pub name: String,
    pub rating: f64,
    pub comment: String,
    /// Reviewer user id
    pub user: String,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            name: review.name,
            rating: review.rating,
            comment: review.comment,
            user: review.user_id.to_string(),
            created_at: review.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Owning vendor's user id
    pub user: String,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub bundle_quantity: Option<i64>,
    pub remaining_quantity: Option<i64>,
    pub status: ProductStatusDto,
    pub reviews: Vec<ReviewResponse>,
    pub num_reviews: i64,
    /// Mean review rating, 0 without reviews
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            user: product.user_id.to_string(),
            name: product.name,
            price: product.price,
            image: product.image,
            bundle_quantity: product.bundle_quantity,
            remaining_quantity: product.remaining_quantity,
            status: product.status.into(),
            reviews: product.reviews.into_iter().map(|r| r.into()).collect(),
            num_reviews: product.num_reviews,
            rating: product.rating,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OwnerResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for OwnerResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
        }
    }
}

/// A product with its vendor's public profile.
#[derive(Debug, Clone, Object)]
pub struct ProductDetailResponse {
    #[oai(flatten)]
    pub product: ProductResponse,
    /// Vendor profile, null when the account no longer exists
    pub owner: Option<OwnerResponse>,
}

impl From<ProductWithOwner> for ProductDetailResponse {
    fn from(view: ProductWithOwner) -> Self {
        Self {
            product: view.product.into(),
            owner: view.owner.map(|o| o.into()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
