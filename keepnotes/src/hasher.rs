
use std::error::Error;
use argon2::password_hash::{PasswordHashString, SaltString};
use argon2::{Algorithm, Argon2, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use rand::rand_core::OsError;
use rand::rngs::OsRng;
use rand::TryRngCore;
use thiserror::Error;
use tokio::task::JoinError;

const SALT_LEN: usize = 16;

pub trait Hasher: Send + Sync {
    fn generate_hash(
        &self,
        password: &str,
    ) -> Result<PasswordHashString, HasherError>;

    fn check_hash(
        &self,
        hash: PasswordHash<'_>,
        password: &str,
    ) -> Result<bool, HasherError>;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductionHasherConfig {
    pub argon2_params: argon2::Params,
}

impl ProductionHasherConfig {
    pub fn new(argon2_params: argon2::Params) -> Self {
        ProductionHasherConfig {
            argon2_params,
        }
    }
}

pub struct ProductionHasher {
    argon2_params: argon2::Params,
}

impl ProductionHasher {
    pub fn new(config: ProductionHasherConfig) -> Self {
        ProductionHasher {
            argon2_params: config.argon2_params,
        }
    }

    fn get_hasher(&self) -> Argon2<'_> {
        Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            self.argon2_params.clone(),
        )
    }

    fn make_salt(&self) -> Result<SaltString, HasherError> {
        let mut salt = [0u8; SALT_LEN];
        OsRng.try_fill_bytes(&mut salt)?;
        SaltString::encode_b64(&salt)
            .map_err(|e| HasherError::Hash(Box::new(e)))
    }
}

impl Hasher for ProductionHasher {
    fn generate_hash(
        &self,
        password: &str,
    ) -> Result<PasswordHashString, HasherError> {
        let salt = self.make_salt()?;
        self.get_hasher()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| HasherError::Hash(Box::new(e)))
            .map(|v| v.serialize())
    }

    fn check_hash(
        &self,
        hash: PasswordHash<'_>,
        password: &str,
    ) -> Result<bool, HasherError> {
        self.get_hasher()
            .verify_password(password.as_bytes(), &hash)
            .map(|_| true)
            .or_else(|e|
                if let argon2::password_hash::Error::Password = e {
                    Ok(false)
                } else {
                    Err(e)
                }
            )
            .map_err(|e| HasherError::Hash(Box::new(e)))
    }
}

#[derive(Debug, Error)]
pub enum HasherError {
    #[error("failed to hash password: {0}")]
    Hash(Box<dyn Error + Send + Sync>),

    #[error("failed to get random values: {0}")]
    Random(#[from] OsError),

    #[error("hashing task failed: {0}")]
    Task(#[from] JoinError),
}
