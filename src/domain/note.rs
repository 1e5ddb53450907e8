// src/domain/note.rs
use serde::{Deserialize, Serialize};

/// A single sticky note as it is persisted in the store blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub fixed: bool,
}

impl Note {
    /// New notes always start unpinned
    pub fn new(id: i64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            fixed: false,
        }
    }

    pub fn matches(&self, query: &str) -> bool {
        self.content.to_lowercase().contains(&query.to_lowercase())
    }
}
