use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderMap,
};

use super::error::AuthError;
use super::jwt::verify_token;
use crate::config::AuthConfig;

/// Cookie the identity provider's front-end SDK stores the session token in
pub const SESSION_COOKIE: &str = "__session";

/// An authenticated caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: Option<String>,
}

impl Session {
    /// Verifies the request's session token and builds a session from it
    pub fn from_headers(headers: &HeaderMap, config: &AuthConfig) -> Result<Self, AuthError> {
        let token = session_token(headers).ok_or(AuthError::MissingToken)?;
        let claims = verify_token(token, &config.jwt_secret, config.issuer.as_deref())?;

        Ok(Self {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}

/// Finds the session token: a bearer header wins over the session cookie
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    bearer.or_else(|| {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .map(|(_, token)| token)
            .filter(|token| !token.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::create_token;
    use crate::auth::PublicRoutes;
    use axum::http::HeaderValue;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "session-test-secret".into(),
            issuer: None,
            public_routes: PublicRoutes::default(),
        }
    }

    #[test]
    fn bearer_header_is_read() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));

        assert_eq!(session_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn non_bearer_scheme_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn session_cookie_is_read() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; __session=cookie.token.value"),
        );

        assert_eq!(session_token(&headers), Some("cookie.token.value"));
    }

    #[test]
    fn valid_token_yields_session() {
        let token = create_token("user_42", Some("kim@example.com"), "session-test-secret").unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );

        let session = Session::from_headers(&headers, &config()).expect("valid session");
        assert_eq!(session.user_id, "user_42");
        assert_eq!(session.email.as_deref(), Some("kim@example.com"));
    }

    #[test]
    fn missing_token_is_rejected() {
        let result = Session::from_headers(&HeaderMap::new(), &config());

        assert!(matches!(result, Err(AuthError::MissingToken)));
    }

    #[test]
    fn forged_token_is_rejected() {
        let token = create_token("user_42", None, "some-other-secret").unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );

        let result = Session::from_headers(&headers, &config());
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }
}
