use thiserror::Error;

/// Reasons a request could not be tied to a valid session
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no session token present")]
    MissingToken,

    #[error("invalid session token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}
