//! Stand-alone demonstration of the protected-endpoint pattern.
//!
//! Two routes: a public root and a `/dashboard` guarded by a mock bearer
//! check. The check accepts any `Bearer` token; it exists to show how a
//! route rejects anonymous callers, not to validate anything.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::api::errors::ApiError;

/// Extractor that passes for any `Authorization: Bearer <token>` header
pub struct MockBearer(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for MockBearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| MockBearer(token.to_string()))
            .ok_or_else(ApiError::unauthorized)
    }
}

/// GET /
pub async fn index() -> Json<Value> {
    Json(json!({ "message": "Public endpoint" }))
}

/// GET /dashboard
pub async fn dashboard(MockBearer(_token): MockBearer) -> Json<Value> {
    Json(json!({ "message": "Access granted" }))
}

/// Builds the demonstration router
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/dashboard", get(dashboard))
}
