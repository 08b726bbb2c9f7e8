use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Duration;
use crate::config::hasher_config::ProductionHasherConfigData;
use crate::lib_constants::{DEFAULT_ACCESS_TOKEN_TTL_SECS, DEFAULT_MAX_NOTE_BODY_LEN, DEFAULT_MAX_NOTE_TITLE_LEN, MAX_ACCESS_TOKEN_TTL_SECS};
use crate::note_store::NoteLimits;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AppConfig {
    /// Access token lifetime, in seconds.
    #[serde(default = "app_config_default_access_token_ttl")]
    pub access_token_ttl: u64,

    /// File with the base64-encoded token signing secret. A random secret
    /// is generated on every start if unset.
    #[serde(default)]
    pub token_secret_file: Option<PathBuf>,

    #[serde(default = "app_config_default_max_note_title_len")]
    pub max_note_title_len: u64,

    #[serde(default = "app_config_default_max_note_body_len")]
    pub max_note_body_len: u64,

    #[serde(default)]
    pub hasher_config: ProductionHasherConfigData,
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("access_token_ttl must not exceed {MAX_ACCESS_TOKEN_TTL_SECS} seconds")]
pub struct TokenTtlTooLong;

pub fn app_config_default_access_token_ttl() -> u64 {
    DEFAULT_ACCESS_TOKEN_TTL_SECS
}

pub fn app_config_default_max_note_title_len() -> u64 {
    DEFAULT_MAX_NOTE_TITLE_LEN
}

pub fn app_config_default_max_note_body_len() -> u64 {
    DEFAULT_MAX_NOTE_BODY_LEN
}

impl AppConfig {
    /// Checked so that an expiry computed from it can always be represented.
    pub fn token_ttl(&self) -> Result<Duration, TokenTtlTooLong> {
        if self.access_token_ttl > MAX_ACCESS_TOKEN_TTL_SECS {
            return Err(TokenTtlTooLong)
        }
        i64::try_from(self.access_token_ttl)
            .map(Duration::seconds)
            .map_err(|_| TokenTtlTooLong)
    }

    pub fn note_limits(&self) -> NoteLimits {
        NoteLimits {
            max_title_len: self.max_note_title_len,
            max_body_len: self.max_note_body_len,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            access_token_ttl: DEFAULT_ACCESS_TOKEN_TTL_SECS,
            token_secret_file: None,
            max_note_title_len: DEFAULT_MAX_NOTE_TITLE_LEN,
            max_note_body_len: DEFAULT_MAX_NOTE_BODY_LEN,
            hasher_config: ProductionHasherConfigData::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_defaults_match() {
        assert_eq!(
            AppConfig::default(),
            serde_json::de::from_str("{}").unwrap(),
        )
    }

    #[test]
    fn token_ttl_is_in_seconds() {
        let config = AppConfig {
            access_token_ttl: 90,
            ..Default::default()
        };
        assert_eq!(config.token_ttl(), Ok(Duration::seconds(90)));
        assert_eq!(AppConfig::default().token_ttl(), Ok(Duration::days(1)));
    }

    #[test]
    fn token_ttl_is_capped() {
        let at_cap = AppConfig {
            access_token_ttl: MAX_ACCESS_TOKEN_TTL_SECS,
            ..Default::default()
        };
        let ttl = at_cap.token_ttl().unwrap();
        assert!(time::OffsetDateTime::now_utc().checked_add(ttl).is_some());

        for access_token_ttl in [MAX_ACCESS_TOKEN_TTL_SECS + 1, 1_000_000_000_000, u64::MAX] {
            let config = AppConfig {
                access_token_ttl,
                ..Default::default()
            };
            assert_eq!(config.token_ttl(), Err(TokenTtlTooLong));
        }
    }
}
