use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::filter::{ProductFilter, StatusCondition, StockCondition};
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::{ProductEntity, ReviewDocument, price_to_column};

const PRODUCT_COLUMNS: &str = "id, user_id, name, price, image, bundle_quantity, remaining_quantity, status, reviews, num_reviews, rating, created_at, updated_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Bind values for the filtered listing query, one per optional criterion.
struct FilterBinds {
    owner: Option<String>,
    keyword_pattern: Option<String>,
    stock: Option<&'static str>,
    status_is: Option<String>,
    status_is_not: Option<String>,
}

impl FilterBinds {
    fn from_filter(filter: &ProductFilter) -> Self {
        let (status_is, status_is_not) = match filter.status {
            Some(StatusCondition::Is(s)) => (Some(s.to_string()), None),
            Some(StatusCondition::IsNot(s)) => (None, Some(s.to_string())),
            None => (None, None),
        };

        Self {
            owner: filter.owner.as_ref().map(|o| o.as_str().to_string()),
            keyword_pattern: filter.keyword_pattern(),
            stock: filter.stock.map(|s| match s {
                StockCondition::InStock => "in_stock",
                StockCondition::SoldOut => "sold_out",
            }),
            status_is,
            status_is_not,
        }
    }
}

fn database_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!("Product query failed: {err}");
    RepositoryError::DatabaseError
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        let binds = FilterBinds::from_filter(filter);
        let sql = format!(
            r#"SELECT {PRODUCT_COLUMNS} FROM products
            WHERE ($1::TEXT IS NULL OR user_id = $1)
              AND ($2::TEXT IS NULL OR name ~* $2)
              AND ($3::TEXT IS NULL
                   OR ($3 = 'in_stock' AND remaining_quantity > 0)
                   OR ($3 = 'sold_out' AND remaining_quantity = 0))
              AND ($4::TEXT IS NULL OR status = $4)
              AND ($5::TEXT IS NULL OR status <> $5)
            ORDER BY created_at DESC"#
        );

        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(binds.owner)
            .bind(binds.keyword_pattern)
            .bind(binds.stock)
            .bind(binds.status_is)
            .bind(binds.status_is_not)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let entity = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let reviews: Vec<ReviewDocument> =
            product.reviews.iter().map(ReviewDocument::from_domain).collect();

        sqlx::query(
            r#"INSERT INTO products (id, user_id, name, price, image, bundle_quantity, remaining_quantity, status, reviews, num_reviews, rating, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                price = EXCLUDED.price,
                image = EXCLUDED.image,
                bundle_quantity = EXCLUDED.bundle_quantity,
                remaining_quantity = EXCLUDED.remaining_quantity,
                status = EXCLUDED.status,
                reviews = EXCLUDED.reviews,
                num_reviews = EXCLUDED.num_reviews,
                rating = EXCLUDED.rating,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(product.user_id.as_str())
        .bind(&product.name)
        .bind(price_to_column(product.price)?)
        .bind(&product.image)
        .bind(product.bundle_quantity)
        .bind(product.remaining_quantity)
        .bind(product.status.to_string())
        .bind(Json(reviews))
        .bind(product.num_reviews)
        .bind(product.rating)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }
}
