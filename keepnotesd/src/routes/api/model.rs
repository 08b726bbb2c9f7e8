use keepnotes::credential_store::Identity;
use keepnotes::note_store::Note;
use keepnotes::username_string::UsernameString;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Body of both `/auth/register` and `/auth/login`. Missing fields are
/// read as empty so that they are reported the same way as empty ones.
#[derive(Clone, Deserialize, Eq, PartialEq)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: UsernameString,
}

impl From<Identity> for UserResponse {
    fn from(value: Identity) -> Self {
        UserResponse {
            id: value.id,
            username: value.username,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub token: String,
    pub user: UserResponse,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NoteListResponse {
    pub notes: Vec<Note>,
    pub count: usize,
}

impl From<Vec<Note>> for NoteListResponse {
    fn from(notes: Vec<Note>) -> Self {
        NoteListResponse {
            count: notes.len(),
            notes,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,

    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse { error: error.into() }
    }
}
