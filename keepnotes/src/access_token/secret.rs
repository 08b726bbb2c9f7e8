use std::fmt::{Debug, Formatter};
use std::fs::{self, OpenOptions};
use std::io::Write;
#[cfg(unix)] use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;
use base64ct::{Base64, Encoding};
use crate::access_token::TokenSecretError;
use crate::lib_constants::{GENERATED_TOKEN_SECRET_LEN, MIN_TOKEN_SECRET_LEN};
use crate::rng::make_secret;

/// Shared HMAC key for access tokens. Stored as standard padded base64.
#[derive(Clone, Eq, PartialEq)]
pub struct TokenSecret(Box<[u8]>);

impl TokenSecret {
    pub fn new(secret: impl Into<Box<[u8]>>) -> Result<Self, TokenSecretError> {
        let secret = secret.into();
        if secret.len() < MIN_TOKEN_SECRET_LEN {
            return Err(TokenSecretError::TooShort { min: MIN_TOKEN_SECRET_LEN })
        }
        Ok(TokenSecret(secret))
    }

    pub fn generate() -> Self {
        TokenSecret(make_secret(&mut rand::rng(), GENERATED_TOKEN_SECRET_LEN))
    }

    pub fn from_base64(encoded: &str) -> Result<Self, TokenSecretError> {
        Self::new(
            Base64::decode_vec(encoded.trim_ascii())
                .map_err(TokenSecretError::Decode)?
        )
    }

    pub fn read_from_file(path: &Path) -> Result<Self, TokenSecretError> {
        Self::from_base64(&fs::read_to_string(path)?)
    }

    pub fn write_to_file(&self, path: &Path) -> Result<(), TokenSecretError> {
        let mut options = OpenOptions::new();
        #[cfg(unix)] options.mode(0o600);
        let mut file = options
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        file.write_all((self.to_base64() + "\n").as_bytes())?;
        Ok(())
    }

    pub fn to_base64(&self) -> String {
        Base64::encode_string(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for TokenSecret {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("TokenSecret(..)")
    }
}
