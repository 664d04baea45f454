use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::ProductStatus;
use crate::domain::shared::value_objects::UserId;

pub const SAMPLE_NAME: &str = "Sample name";
pub const SAMPLE_IMAGE: &str = "/images/sample.jpg";

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub user_id: UserId,
    /// Reviewer display name at the time the review was written.
    pub name: String,
    pub rating: f64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewReviewProps {
    pub user_id: UserId,
    pub name: String,
    pub rating: f64,
    pub comment: String,
}

impl Review {
    pub fn new(props: NewReviewProps) -> Self {
        Self {
            user_id: props.user_id,
            name: props.name,
            rating: props.rating,
            comment: props.comment,
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        user_id: UserId,
        name: String,
        rating: f64,
        comment: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            name,
            rating,
            comment,
            created_at,
        }
    }
}

/// The vendor-editable fields of a product.
///
/// An update replaces all of them at once: a `None` here clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDetails {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub bundle_quantity: Option<i64>,
    pub remaining_quantity: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub bundle_quantity: Option<i64>,
    pub remaining_quantity: Option<i64>,
    pub status: ProductStatus,
    pub reviews: Vec<Review>,
    pub num_reviews: i64,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a placeholder listing owned by `user_id`.
    ///
    /// The vendor is expected to fill in real values with an update right after.
    pub fn new(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: Some(SAMPLE_NAME.to_string()),
            price: Some(0.0),
            image: Some(SAMPLE_IMAGE.to_string()),
            bundle_quantity: Some(0),
            remaining_quantity: None,
            status: ProductStatus::default(),
            reviews: Vec::new(),
            num_reviews: 0,
            rating: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        name: Option<String>,
        price: Option<f64>,
        image: Option<String>,
        bundle_quantity: Option<i64>,
        remaining_quantity: Option<i64>,
        status: ProductStatus,
        reviews: Vec<Review>,
        num_reviews: i64,
        rating: f64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            price,
            image,
            bundle_quantity,
            remaining_quantity,
            status,
            reviews,
            num_reviews,
            rating,
            created_at,
            updated_at,
        }
    }

    pub fn is_available(&self) -> bool {
        self.remaining_quantity.is_some_and(|q| q > 0)
    }

    pub fn apply_details(&mut self, details: ProductDetails) {
        self.name = details.name;
        self.price = details.price;
        self.image = details.image;
        self.bundle_quantity = details.bundle_quantity;
        self.remaining_quantity = details.remaining_quantity;
        self.touch();
    }

    /// Logical deletion: the listing stays stored but has no stock left.
    pub fn cancel(&mut self) {
        self.status = ProductStatus::Cancelled;
        self.remaining_quantity = Some(0);
        self.touch();
    }

    /// Marks the product as shipped. Any prior status is accepted.
    pub fn dispatch(&mut self) {
        self.status = ProductStatus::Dispatched;
        self.touch();
    }

    pub fn has_review_from(&self, user_id: &UserId) -> bool {
        self.reviews.iter().any(|r| &r.user_id == user_id)
    }

    /// Appends a review and refreshes `num_reviews` and `rating`.
    ///
    /// A user may review a product only once.
    pub fn add_review(&mut self, review: Review) -> Result<(), ProductError> {
        if self.has_review_from(&review.user_id) {
            return Err(ProductError::AlreadyReviewed);
        }

        self.reviews.push(review);
        self.refresh_review_stats();
        self.touch();
        Ok(())
    }

    fn refresh_review_stats(&mut self) {
        self.num_reviews = self.reviews.len() as i64;
        self.rating = if self.reviews.is_empty() {
            0.0
        } else {
            self.reviews.iter().map(|r| r.rating).sum::<f64>() / self.reviews.len() as f64
        };
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
