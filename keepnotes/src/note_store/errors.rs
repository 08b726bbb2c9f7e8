use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum NoteStoreError {
    #[error("note not found")]
    NotFound,

    #[error("access denied")]
    Forbidden,

    #[error("title is required")]
    EmptyTitle,

    #[error("note too large")]
    TooBig,
}
