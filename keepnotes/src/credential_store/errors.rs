use thiserror::Error;
use crate::hasher::HasherError;

#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("user already exists")]
    AlreadyExists,

    #[error("user not found")]
    NotFound,

    #[error("wrong password")]
    WrongCredential,

    #[error("hashing failed: {0}")]
    Internal(#[from] HasherError),
}
