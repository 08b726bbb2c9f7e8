use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessTokenIssueError {
    #[error("token expiry is out of range")]
    ExpiryOverflow,

    #[error("access token serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum AccessTokenValidationError {
    #[error("malformed token")]
    Malformed,

    #[error("token signature mismatch")]
    Forged,

    #[error("token expired")]
    Expired,
}

#[derive(Debug, Error)]
pub enum TokenSecretError {
    #[error("token secret must be at least {min} bytes long")]
    TooShort {
        min: usize,
    },

    #[error("token secret has invalid length")]
    InvalidLength,

    #[error("failed to decode token secret: {0}")]
    Decode(base64ct::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
