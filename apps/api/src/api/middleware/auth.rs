use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::Session;

/// Gatekeeper for every route not on the public allow-list
///
/// Verifies the session token and stores the [`Session`] in request
/// extensions for [`AuthSession`] to pick up.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if state.auth.public_routes.is_public(request.uri().path()) {
        return next.run(request).await;
    }

    match Session::from_headers(request.headers(), &state.auth) {
        Ok(session) => {
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        Err(e) => {
            tracing::debug!(path = %request.uri().path(), error = %e, "rejected unauthenticated request");
            ApiError::unauthorized().into_response()
        }
    }
}

/// Session extractor for protected handlers
///
/// Usage:
/// ```rust,ignore
/// async fn protected_handler(
///     AuthSession(session): AuthSession,
/// ) -> Result<String, ApiError> {
///     Ok(format!("Hello {}", session.user_id))
/// }
/// ```
pub struct AuthSession(pub Session);

#[async_trait]
impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(AuthSession)
            .ok_or_else(ApiError::unauthorized)
    }
}
