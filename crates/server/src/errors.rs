use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};
use utoipa::ToSchema;

use service::errors::ServiceError;

/// Every failure a handler can return. Bodies are fixed; details only reach the log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Restaurant not found")]
    RestaurantNotFound,
    #[error("validation errors")]
    Validation,
    #[error("internal error: {0}")]
    Internal(String),
}

/// `{"error": "..."}`, used for 404s.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// `{"errors": ["..."]}`, used for 400s and 500s.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorsBody {
    pub errors: Vec<String>,
}

pub const VALIDATION_MESSAGE: &str = "validation errors";
pub const INTERNAL_MESSAGE: &str = "An unexpected error occurred";

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => ApiError::RestaurantNotFound,
            e if e.is_validation() => {
                debug!(reason = %e, "request rejected");
                ApiError::Validation
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::RestaurantNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody { error: "Restaurant not found".into() }),
            )
                .into_response(),
            ApiError::Validation => (
                StatusCode::BAD_REQUEST,
                Json(ErrorsBody { errors: vec![VALIDATION_MESSAGE.into()] }),
            )
                .into_response(),
            ApiError::Internal(detail) => {
                error!(error = %detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorsBody { errors: vec![INTERNAL_MESSAGE.into()] }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn maps_service_errors_to_statuses() {
        let cases = [
            (ServiceError::not_found("Restaurant"), StatusCode::NOT_FOUND),
            (ServiceError::Validation("price".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Model(ModelError::Validation("price".into())), StatusCode::BAD_REQUEST),
            (ServiceError::Model(ModelError::Db("locked".into())), StatusCode::INTERNAL_SERVER_ERROR),
            (ServiceError::Db("connection reset".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }
}
