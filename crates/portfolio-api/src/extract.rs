use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use portfolio_types::{FieldError, ValidationFailure};
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::Segment;

use crate::error::ApiError;

/// JSON body extractor that reports type mismatches per field.
///
/// Syntax errors and a wrong content type stay plain 400s. A body that parses
/// but does not fit `T` (a `null` name, a string read time) becomes a
/// validation failure naming the offending top-level key.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        decode(value).map(JsonBody)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_path_to_error::deserialize(value).map_err(|err| {
        let field = err.path().iter().find_map(|segment| match segment {
            Segment::Map { key } => Some(key.clone()),
            _ => None,
        });

        match field {
            Some(field) => ValidationFailure::new(vec![FieldError::new(
                field,
                err.inner().to_string(),
            )])
            .into(),
            None => ApiError::BadRequest(err.inner().to_string()),
        }
    })
}
