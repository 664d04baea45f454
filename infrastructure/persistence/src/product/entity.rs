use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, Review};
use business::domain::product::value_objects::ProductStatus;
use business::domain::shared::value_objects::UserId;

/// Review as embedded in the `reviews` JSONB column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDocument {
    pub user: String,
    pub name: String,
    pub rating: f64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl ReviewDocument {
    pub fn from_domain(review: &Review) -> Self {
        Self {
            user: review.user_id.as_str().to_string(),
            name: review.name.clone(),
            rating: review.rating,
            comment: review.comment.clone(),
            created_at: review.created_at,
        }
    }

    pub fn into_domain(self) -> Review {
        Review::from_repository(
            UserId::new(self.user),
            self.name,
            self.rating,
            self.comment,
            self.created_at,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub user_id: String,
    pub name: Option<String>,
    pub price: Option<BigDecimal>,
    pub image: Option<String>,
    pub bundle_quantity: Option<i64>,
    pub remaining_quantity: Option<i64>,
    pub status: String,
    pub reviews: Json<Vec<ReviewDocument>>,
    pub num_reviews: i64,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let status = self
            .status
            .parse::<ProductStatus>()
            .map_err(|_| RepositoryError::CorruptedDocument)?;
        let price = match self.price {
            Some(p) => Some(
                p.to_string()
                    .parse::<f64>()
                    .map_err(|_| RepositoryError::CorruptedDocument)?,
            ),
            None => None,
        };

        Ok(Product::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.name,
            price,
            self.image,
            self.bundle_quantity,
            self.remaining_quantity,
            status,
            self.reviews
                .0
                .into_iter()
                .map(ReviewDocument::into_domain)
                .collect(),
            self.num_reviews,
            self.rating,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Converts a domain price into the NUMERIC column value.
///
/// Goes through the shortest decimal form of the `f64`; the column has no
/// scale, so the value reads back unchanged.
pub fn price_to_column(price: Option<f64>) -> Result<Option<BigDecimal>, RepositoryError> {
    match price {
        Some(p) if p.is_finite() => BigDecimal::from_str(&p.to_string())
            .map(Some)
            .map_err(|_| RepositoryError::CorruptedDocument),
        Some(_) => Err(RepositoryError::CorruptedDocument),
        None => Ok(None),
    }
}
