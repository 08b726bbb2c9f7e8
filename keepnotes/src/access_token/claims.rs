use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;
use crate::username_string::UsernameString;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Claims {
    #[serde(rename = "uid")]
    pub owner_id: Uuid,

    #[serde(rename = "usr")]
    pub username: UsernameString,

    #[serde(rename = "exp", with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}
