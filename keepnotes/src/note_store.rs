mod note;
mod errors;
mod internal;

use async_trait::async_trait;
use uuid::Uuid;

pub use errors::NoteStoreError;
pub use internal::{NoteStoreImpl, ProductionNoteStore};
pub use note::{NewNote, Note, NoteId, NoteIdParseError, NoteUpdate, Priority, PriorityParseError};

/// Per-owner note collection.
///
/// Every operation is authorized against the caller-supplied owner id.
/// Notes of other owners are reported as [NoteStoreError::Forbidden]
/// without revealing anything else about them.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn create(
        &self,
        owner: Uuid,
        input: NewNote,
    ) -> Result<Note, NoteStoreError>;

    async fn get(
        &self,
        owner: Uuid,
        id: NoteId,
    ) -> Result<Note, NoteStoreError>;

    /// All notes of `owner`, in creation order.
    async fn list(&self, owner: Uuid) -> Vec<Note>;

    /// Replaces the fields present in `update` and refreshes `updated_at`,
    /// even when no field is present.
    async fn update(
        &self,
        owner: Uuid,
        id: NoteId,
        update: NoteUpdate,
    ) -> Result<Note, NoteStoreError>;

    async fn delete(
        &self,
        owner: Uuid,
        id: NoteId,
    ) -> Result<(), NoteStoreError>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NoteLimits {
    pub max_title_len: u64,
    pub max_body_len: u64,
}
