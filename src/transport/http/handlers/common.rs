use crate::transport::http::error::ApiError;
use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::Json;
use uuid::Uuid;

/// `{id}` path segment. A segment that is not a UUID matches no resource, so it
/// is rejected as 404 rather than 400.
#[derive(Debug, Clone, Copy)]
pub struct ResourceId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<Uuid>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| ResourceId(id))
            .map_err(|_| ApiError::NotFound)
    }
}

/// Unwraps a JSON body, turning a malformed or missing one into a 400.
pub fn json_body<T>(request: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    request
        .map(|Json(body)| body)
        .map_err(|e| ApiError::InvalidBody(e.body_text()))
}

/// `Location` header pointing at the get-by-id route of a created resource.
pub fn location(collection: &str, id: Uuid) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&format!("{}/{}", collection, id)) {
        headers.insert(header::LOCATION, value);
    }
    headers
}
