use thiserror::Error;

/// Error type for token codec operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Unsupported token algorithm: {0}")]
    UnsupportedAlgorithm(String),
}
