use thiserror::Error;

/// Errors that prevent a completion request from starting
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("failed to open model stream: {0}")]
    Request(String),
}
