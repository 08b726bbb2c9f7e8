use keepnotes::access_token::{AccessTokenIssueError, AccessTokenValidationError};
use keepnotes::credential_store::CredentialStoreError;
use keepnotes::hasher::HasherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessGranterError {
    #[error("token format error")]
    HeaderFormatError,

    #[error("invalid token: {0}")]
    InvalidToken(#[from] AccessTokenValidationError),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("username already taken")]
    UsernameTaken,

    #[error("credential store failure: {0}")]
    CredentialStoreError(#[from] HasherError),

    #[error("access token issue failure: {0}")]
    AccessTokenIssueError(#[from] AccessTokenIssueError),
}

impl From<CredentialStoreError> for AccessGranterError {
    fn from(value: CredentialStoreError) -> Self {
        match value {
            CredentialStoreError::AlreadyExists => AccessGranterError::UsernameTaken,
            CredentialStoreError::NotFound
            | CredentialStoreError::WrongCredential => AccessGranterError::InvalidCredentials,
            CredentialStoreError::Internal(e) => AccessGranterError::CredentialStoreError(e),
        }
    }
}
