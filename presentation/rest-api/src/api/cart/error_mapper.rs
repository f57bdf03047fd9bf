use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::{CartError, CartErrorKind};

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match self.kind() {
            CartErrorKind::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            CartErrorKind::InvalidRequest => (StatusCode::BAD_REQUEST, "ValidationError"),
            CartErrorKind::Conflict => (StatusCode::CONFLICT, "Conflict"),
            CartErrorKind::Internal => {
                tracing::error!("Cart operation failed: {self:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_missing_cart_to_404() {
        let (status, json) = CartError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "User does not have a cart");
    }

    #[test]
    fn should_map_rule_violations_to_400() {
        let (status, json) = CartError::InsufficientBalance.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.message, "Wallet balance is insufficient");
    }

    #[test]
    fn should_map_stale_cart_to_409() {
        let (status, _) = CartError::Conflict.into_error_response();
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn should_map_storage_failures_to_500() {
        let (status, json) =
            CartError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InternalError");
    }
}
