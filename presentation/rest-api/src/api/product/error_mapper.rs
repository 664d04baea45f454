use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        // Missing products, foreign products and store failures all answer 404.
        let (status, name, message) = match &self {
            ProductError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, "NotFound", "product.not_found")
            }
            ProductError::AlreadyReviewed => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.already_reviewed",
            ),
            ProductError::Repository(_) => (
                StatusCode::NOT_FOUND,
                "RepositoryError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
