use async_trait::async_trait;
use keepnotes::access_token::{AccessTokenService, Claims};
use keepnotes::clock::{Clock, SystemClock};
use keepnotes::credential_store::{CredentialStore, ProductionCredentialStore};
use keepnotes::username_string::UsernameString;
use log::{debug, info, trace};
use time::Duration;

mod errors;
mod model;

pub use errors::AccessGranterError;
pub use model::LoginResult;

/// Session boundary: turns credentials into access tokens and access tokens
/// back into the identity they were issued for.
#[async_trait]
pub trait AccessGranter: Send + Sync + 'static {
    /// Authenticates an `Authorization` header value of the form
    /// `Bearer <token>`.
    async fn check_user_access(
        &self,
        auth_header_value: &str,
    ) -> Result<Claims, AccessGranterError>;

    async fn register_user(
        &self,
        username: &UsernameString,
        password: &str,
    ) -> Result<LoginResult, AccessGranterError>;

    async fn login_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResult, AccessGranterError>;
}

pub type ProductionAccessGranter = AccessGranterImpl<ProductionCredentialStore, SystemClock>;

pub struct AccessGranterImpl<S: CredentialStore, C: Clock> {
    credential_store: S,
    access_token_service: AccessTokenService<C>,
    access_token_ttl: Duration,
}

impl<S: CredentialStore, C: Clock> AccessGranterImpl<S, C> {
    pub fn new(
        credential_store: S,
        access_token_service: AccessTokenService<C>,
        access_token_ttl: Duration,
    ) -> Self {
        AccessGranterImpl {
            credential_store,
            access_token_service,
            access_token_ttl,
        }
    }
}

#[async_trait]
impl<S, C> AccessGranter for AccessGranterImpl<S, C>
where
    S: CredentialStore + 'static,
    C: Clock + 'static,
{
    async fn check_user_access(
        &self,
        auth_header_value: &str,
    ) -> Result<Claims, AccessGranterError> {
        let token = auth_header_value.strip_prefix("Bearer ")
            .ok_or(AccessGranterError::HeaderFormatError)?;
        let claims = self.access_token_service.validate(token.trim())
            .inspect_err(|e| info!("rejected access token: {e}"))?;
        trace!("valid token for user \"{}\"", claims.username);
        Ok(claims)
    }

    async fn register_user(
        &self,
        username: &UsernameString,
        password: &str,
    ) -> Result<LoginResult, AccessGranterError> {
        debug!("registering user \"{username}\"");
        let identity = self.credential_store
            .register(username, password)
            .await?;
        let access_token = self.access_token_service
            .issue(&identity, self.access_token_ttl)?;
        Ok(LoginResult { identity, access_token })
    }

    async fn login_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResult, AccessGranterError> {
        debug!("logging user \"{username}\" in");
        let identity = self.credential_store
            .login(username, password)
            .await
            .inspect_err(|e| info!("login of user \"{username}\" failed: {e}"))?;
        let access_token = self.access_token_service
            .issue(&identity, self.access_token_ttl)?;
        Ok(LoginResult { identity, access_token })
    }
}
