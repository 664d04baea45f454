/// Why a product lookup was refused.
///
/// Both reasons surface to callers as the same `product.not_found` error so
/// that a product's existence is not revealed to non-owners. The tag is kept
/// for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    Missing,
    NotOwner,
}

impl std::fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotFoundReason::Missing => write!(f, "missing"),
            NotFoundReason::NotOwner => write!(f, "not_owner"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound { reason: NotFoundReason },
    #[error("product.already_reviewed")]
    AlreadyReviewed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    pub fn missing() -> Self {
        ProductError::NotFound {
            reason: NotFoundReason::Missing,
        }
    }

    pub fn not_owner() -> Self {
        ProductError::NotFound {
            reason: NotFoundReason::NotOwner,
        }
    }

    /// Maps a repository lookup failure, turning `NotFound` into a missing product.
    pub fn from_lookup(error: crate::domain::errors::RepositoryError) -> Self {
        match error {
            crate::domain::errors::RepositoryError::NotFound => ProductError::missing(),
            other => ProductError::Repository(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;

    #[test]
    fn should_render_same_message_for_missing_and_not_owner() {
        assert_eq!(ProductError::missing().to_string(), "product.not_found");
        assert_eq!(ProductError::not_owner().to_string(), "product.not_found");
    }

    #[test]
    fn should_map_repository_not_found_to_missing_product() {
        let error = ProductError::from_lookup(RepositoryError::NotFound);
        assert!(matches!(
            error,
            ProductError::NotFound {
                reason: NotFoundReason::Missing
            }
        ));
    }

    #[test]
    fn should_keep_other_repository_errors() {
        let error = ProductError::from_lookup(RepositoryError::DatabaseError);
        assert!(matches!(
            error,
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
