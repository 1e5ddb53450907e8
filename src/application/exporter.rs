// src/application/exporter.rs
use crate::constants::{EXPORT_FILE_NAME, EXPORT_HEADER};
use crate::domain::{DomainError, Note};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Render notes as comma-separated text.
///
/// Fields are written verbatim: a comma or newline inside `content` shifts the
/// columns of that row. Rows are joined with `\n` without a trailing newline.
pub fn to_csv(notes: &[Note]) -> String {
    std::iter::once(EXPORT_HEADER.join(","))
        .chain(
            notes
                .iter()
                .map(|n| format!("{},{},{}", n.id, n.content, n.fixed)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes `notes.csv` into a target directory
#[derive(Debug, Clone)]
pub struct Exporter {
    directory: PathBuf,
}

impl Exporter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Export the notes in the given order, overwriting an earlier export
    #[instrument(level = "debug", skip(self, notes), fields(count = notes.len()))]
    pub fn export(&self, notes: &[Note]) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.directory).map_err(|e| {
            DomainError::ExportError(format!(
                "Failed to create export directory {}: {}",
                self.directory.display(),
                e
            ))
        })?;

        let path = self.directory.join(EXPORT_FILE_NAME);
        fs::write(&path, to_csv(notes)).map_err(|e| {
            DomainError::ExportError(format!("Failed to write {}: {}", path.display(), e))
        })?;

        info!(path = %path.display(), notes = notes.len(), "Exported notes");
        Ok(path)
    }
}
