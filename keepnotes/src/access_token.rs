mod claims;
mod errors;
mod secret;

use base64ct::{Base64UrlUnpadded, Encoding};
use hmac::{Hmac, Mac};
use log::trace;
use sha2::Sha256;
use time::Duration;
use crate::clock::{Clock, SystemClock};
use crate::credential_store::Identity;
use crate::lib_constants::TOKEN_SEGMENT_SEPARATOR;

pub use claims::Claims;
pub use errors::{AccessTokenIssueError, AccessTokenValidationError, TokenSecretError};
pub use secret::TokenSecret;

type HmacSha256 = Hmac<Sha256>;

pub type ProductionAccessTokenService = AccessTokenService<SystemClock>;

/// Issues and validates stateless access tokens.
///
/// A token is `<payload>.<signature>`: the payload is the JSON-encoded
/// [Claims] and the signature is HMAC-SHA256 over the encoded payload
/// bytes, both in unpadded base64url. Claims are signed, not encrypted.
pub struct AccessTokenService<C: Clock> {
    mac: HmacSha256,
    clock: C,
}

impl ProductionAccessTokenService {
    pub fn new(secret: &TokenSecret) -> Result<Self, TokenSecretError> {
        AccessTokenService::new_impl(secret, SystemClock)
    }
}

impl<C: Clock> AccessTokenService<C> {
    pub fn new_impl(
        secret: &TokenSecret,
        clock: C,
    ) -> Result<Self, TokenSecretError> {
        Ok(
            AccessTokenService {
                mac: HmacSha256::new_from_slice(secret.as_bytes())
                    .map_err(|_| TokenSecretError::InvalidLength)?,
                clock,
            }
        )
    }

    pub fn issue(
        &self,
        identity: &Identity,
        ttl: Duration,
    ) -> Result<String, AccessTokenIssueError> {
        let expires_at = self.clock.now()
            .checked_add(ttl)
            .ok_or(AccessTokenIssueError::ExpiryOverflow)?;
        let claims = Claims {
            owner_id: identity.id,
            username: identity.username.clone(),
            expires_at,
        };
        let payload = Base64UrlUnpadded::encode_string(
            &serde_json::to_vec(&claims)?
        );
        let signature = Base64UrlUnpadded::encode_string(
            &self.sign(payload.as_bytes())
        );
        trace!(
            "access token issued for user \"{}\", expires at {expires_at}",
            claims.username,
        );
        Ok(format!("{payload}{TOKEN_SEGMENT_SEPARATOR}{signature}"))
    }

    /// Checks the token signature and expiry and returns its claims.
    ///
    /// The signature is always recomputed from the payload segment and
    /// compared in constant time. A signature segment that is not valid
    /// base64url cannot match and is reported as forged.
    pub fn validate(
        &self,
        token: &str,
    ) -> Result<Claims, AccessTokenValidationError> {
        let (payload, signature) = token
            .split_once(TOKEN_SEGMENT_SEPARATOR)
            .ok_or(AccessTokenValidationError::Malformed)?;
        let signature = Base64UrlUnpadded::decode_vec(signature)
            .map_err(|_| AccessTokenValidationError::Forged)?;
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| AccessTokenValidationError::Forged)?;

        let payload = Base64UrlUnpadded::decode_vec(payload)
            .map_err(|_| AccessTokenValidationError::Malformed)?;
        let claims: Claims = serde_json::from_slice(&payload)
            .map_err(|_| AccessTokenValidationError::Malformed)?;
        if claims.expires_at <= self.clock.now() {
            return Err(AccessTokenValidationError::Expired)
        }
        Ok(claims)
    }

    fn sign(&self, data: &[u8]) -> Vec<u8> {
        let mut mac = self.mac.clone();
        mac.update(data);
        mac.finalize().into_bytes().to_vec()
    }
}
