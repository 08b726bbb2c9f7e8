mod internal;
mod errors;
mod identity;

use async_trait::async_trait;
use crate::username_string::UsernameString;

pub use errors::CredentialStoreError;
pub use identity::Identity;
pub use internal::{CredentialStoreImpl, ProductionCredentialStore};

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Registers a new identity.
    ///
    /// Exactly one of any number of concurrent registrations of the same
    /// username succeeds, the rest get [CredentialStoreError::AlreadyExists].
    async fn register(
        &self,
        username: &UsernameString,
        password: &str,
    ) -> Result<Identity, CredentialStoreError>;

    /// Checks a password against the identity registered under `username`.
    ///
    /// Takes the username unvalidated: a string that is not a valid
    /// username is an unknown one, and is hashed against all the same.
    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Identity, CredentialStoreError>;
}
