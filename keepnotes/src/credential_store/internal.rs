use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, trace};
use tokio::sync::RwLock;
use tokio::task::spawn_blocking;
use crate::clock::{Clock, SystemClock};
use crate::credential_store::{CredentialStore, CredentialStoreError, Identity};
use crate::hasher::{Hasher, HasherError, ProductionHasher};
use crate::rng::make_uuid;
use crate::username_string::UsernameString;

#[cfg(test)] mod tests;

pub type ProductionCredentialStore = CredentialStoreImpl<ProductionHasher, SystemClock>;

pub struct CredentialStoreImpl<H: Hasher, C: Clock> {
    hasher: Arc<H>,
    clock: C,
    identities: RwLock<HashMap<UsernameString, Identity>>,
}

impl ProductionCredentialStore {
    pub fn new(hasher: ProductionHasher) -> Self {
        CredentialStoreImpl::new_impl(hasher, SystemClock)
    }
}

impl<H: Hasher + 'static, C: Clock> CredentialStoreImpl<H, C> {
    pub fn new_impl(hasher: H, clock: C) -> Self {
        CredentialStoreImpl {
            hasher: Arc::new(hasher),
            clock,
            identities: RwLock::new(HashMap::new()),
        }
    }

    // hashing is cpu-bound and slow, keep it off the async workers
    async fn with_hasher<T, F>(&self, f: F) -> Result<T, HasherError>
    where
        T: Send + 'static,
        F: FnOnce(&H) -> Result<T, HasherError> + Send + 'static,
    {
        let hasher = self.hasher.clone();
        spawn_blocking(move || f(&hasher)).await?
    }
}

#[async_trait]
impl<H: Hasher + 'static, C: Clock> CredentialStore for CredentialStoreImpl<H, C> {
    async fn register(
        &self,
        username: &UsernameString,
        password: &str,
    ) -> Result<Identity, CredentialStoreError> {
        debug!("registering user \"{username}\"");
        // hashing is slow, don't do it for names that are already taken
        if self.identities.read().await.contains_key(username) {
            return Err(CredentialStoreError::AlreadyExists)
        }
        let password = password.to_owned();
        let password_hash = self
            .with_hasher(move |hasher| hasher.generate_hash(&password))
            .await?;

        let mut identities = self.identities.write().await;
        if identities.contains_key(username) {
            return Err(CredentialStoreError::AlreadyExists)
        }
        let identity = Identity {
            id: make_uuid(&mut rand::rng()),
            username: username.clone(),
            password_hash,
            created_at: self.clock.now(),
        };
        identities.insert(username.clone(), identity.clone());
        trace!("registered user \"{username}\" with id {}", identity.id);
        Ok(identity)
    }

    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Identity, CredentialStoreError> {
        trace!("checking credentials for \"{username}\"");
        let identity = self.identities
            .read()
            .await
            .get(username)
            .cloned();
        let password = password.to_owned();
        match identity {
            None => {
                // keeps unknown and malformed usernames as slow as known ones
                let _ = self
                    .with_hasher(move |hasher| hasher.generate_hash(&password))
                    .await;
                Err(CredentialStoreError::NotFound)
            },
            Some(identity) => {
                let password_hash = identity.password_hash.clone();
                let is_correct = self
                    .with_hasher(move |hasher|
                        hasher.check_hash(password_hash.password_hash(), &password)
                    )
                    .await?;
                if is_correct {
                    trace!("user \"{username}\" correctly authenticated");
                    Ok(identity)
                } else {
                    Err(CredentialStoreError::WrongCredential)
                }
            },
        }
    }
}
