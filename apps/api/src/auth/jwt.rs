// Session token verification
// Tokens are HS256 JWTs signed by the identity provider with a shared secret

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::error::AuthError;

/// Session token claims
///
/// # Fields
/// * `sub` - Identity provider user ID
/// * `email` - Primary email address, when the provider includes it
/// * `exp` - Expiry time (seconds since epoch)
/// * `iss` - Issuer, checked only when an issuer is configured
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

/// Creates a signed session token with an 8-hour expiry
///
/// Used by local tooling and tests to mint tokens shaped like the
/// identity provider's.
///
/// # Example
/// ```
/// use planner_api::auth::jwt::{create_token, verify_token};
///
/// let token = create_token("user_123", Some("ana@example.com"), "secret").unwrap();
/// let claims = verify_token(&token, "secret", None).unwrap();
/// assert_eq!(claims.sub, "user_123");
/// ```
pub fn create_token(user_id: &str, email: Option<&str>, secret: &str) -> Result<String, AuthError> {
    create_token_with_issuer(user_id, email, None, secret)
}

/// Creates a signed session token carrying an `iss` claim
pub fn create_token_with_issuer(
    user_id: &str,
    email: Option<&str>,
    issuer: Option<&str>,
    secret: &str,
) -> Result<String, AuthError> {
    let expiry = Utc::now() + Duration::hours(8);
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.map(str::to_string),
        exp: expiry.timestamp() as usize,
        iss: issuer.map(str::to_string),
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?)
}

/// Verifies and decodes a session token
///
/// Expiry is always enforced. When `issuer` is given, the token's `iss`
/// claim must match it.
pub fn verify_token(token: &str, secret: &str, issuer: Option<&str>) -> Result<Claims, AuthError> {
    let mut validation = Validation::default();
    if let Some(issuer) = issuer {
        validation.set_issuer(&[issuer]);
    }

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )?;

    Ok(data.claims)
}
