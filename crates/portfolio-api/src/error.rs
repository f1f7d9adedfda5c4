use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use portfolio_persist::PersistError;
use portfolio_types::{FieldError, ValidationFailure};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(#[from] ValidationFailure),

    #[error("Blog post not found: {0}")]
    PostNotFound(String),

    #[error("Contact message not found: {0}")]
    MessageNotFound(i64),

    #[error("Slug already in use: {0}")]
    Conflict(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Persistence error: {0}")]
    Persist(PersistError),
}

/// Error body returned for every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl From<PersistError> for ApiError {
    fn from(err: PersistError) -> Self {
        match err {
            PersistError::PostNotFound(slug) => ApiError::PostNotFound(slug),
            PersistError::MessageNotFound(id) => ApiError::MessageNotFound(id),
            PersistError::DuplicateSlug(slug) => ApiError::Conflict(slug),
            err if err.is_transient() => ApiError::Unavailable(err.to_string()),
            err => ApiError::Persist(err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, fields) = match self {
            ApiError::Validation(failure) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                failure.fields,
            ),
            ApiError::PostNotFound(_) | ApiError::MessageNotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string(), Vec::new())
            }
            ApiError::Conflict(_) => (StatusCode::CONFLICT, self.to_string(), Vec::new()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string(), Vec::new()),
            ApiError::Unavailable(ref e) => {
                tracing::error!("Storage unavailable: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Storage unavailable, please try again later".to_string(),
                    Vec::new(),
                )
            }
            ApiError::Persist(ref e) => {
                tracing::error!("Persistence error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error".to_string(),
                    Vec::new(),
                )
            }
        };

        let body = Json(ErrorBody {
            error: message,
            fields,
        });

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
