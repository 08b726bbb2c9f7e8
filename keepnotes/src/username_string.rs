use std::borrow::Borrow;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error;
use serde::de::Unexpected::Str;
use thiserror::Error;
use crate::lib_constants::MAX_USERNAME_LEN;
use crate::util::StrExt;

/// A validated username.
///
/// Usernames are compared exactly: no case folding and no trimming of the
/// stored value. A username is accepted when it is not blank, fits in
/// [MAX_USERNAME_LEN] bytes and contains no control characters.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UsernameString(String);

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum UsernameParseError {
    #[error("username is empty")]
    Empty,

    #[error("username is longer than {MAX_USERNAME_LEN} bytes")]
    TooLong,

    #[error("username contains control characters")]
    ControlCharacters,
}

impl FromStr for UsernameString {
    type Err = UsernameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_blank() {
            Err(UsernameParseError::Empty)
        } else if s.len() > MAX_USERNAME_LEN {
            Err(UsernameParseError::TooLong)
        } else if s.chars().any(char::is_control) {
            Err(UsernameParseError::ControlCharacters)
        } else {
            Ok(UsernameString(s.to_string()))
        }
    }
}

impl Deref for UsernameString {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0[..]
    }
}

impl Borrow<str> for UsernameString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for UsernameString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for UsernameString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UsernameString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = UsernameString;

            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                formatter.write_str("string containing a valid username")
            }

            fn visit_str<E>(self, v: &str) -> Result<UsernameString, E>
            where
                E: Error
            {
                UsernameString::from_str(v)
                    .map_err(|_| Error::invalid_value(Str(v), &self))
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}
