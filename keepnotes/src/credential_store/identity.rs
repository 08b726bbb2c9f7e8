use argon2::password_hash::PasswordHashString;
use time::OffsetDateTime;
use uuid::Uuid;
use crate::username_string::UsernameString;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Identity {
    pub id: Uuid,
    pub username: UsernameString,
    pub(crate) password_hash: PasswordHashString,
    pub created_at: OffsetDateTime,
}
