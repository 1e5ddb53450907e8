// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Malformed note store: {0}")]
    MalformedStore(String),
    #[error("Export error: {0}")]
    ExportError(String),
}
