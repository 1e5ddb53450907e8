use anyhow::Result;
use std::path::PathBuf;
use stickynotes::application::{Exporter, NoteController, NoteRepository, SequentialIdGenerator};
use stickynotes::application::Intent;
use stickynotes::infrastructure::{FileKeyValueStore, LocalNoteStore};
use stickynotes::ports::WidgetBoard;
use tempfile::TempDir;

pub type FileStore = LocalNoteStore<FileKeyValueStore>;
#[allow(dead_code)]
pub type FileController = NoteController<FileStore, SequentialIdGenerator, WidgetBoard>;

/// Test fixture owning a temporary store file and export directory
#[allow(dead_code)]
pub struct TestStore {
    _temp_dir: TempDir,
    pub store_path: PathBuf,
    pub export_dir: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let store_path = temp_dir.path().join("data").join("store.json");
        let export_dir = temp_dir.path().join("exports");

        Ok(Self {
            _temp_dir: temp_dir,
            store_path,
            export_dir,
        })
    }

    /// Open a note store over this fixture's file
    pub fn open_store(&self) -> FileStore {
        LocalNoteStore::new(FileKeyValueStore::new(&self.store_path))
    }

    /// Repository with deterministic ids
    pub fn open_repository(&self) -> NoteRepository<FileStore, SequentialIdGenerator> {
        NoteRepository::new(self.open_store(), SequentialIdGenerator)
    }

    /// Controller after the initial page load
    pub fn open_controller(&self) -> Result<FileController> {
        let mut controller = NoteController::new(
            self.open_repository(),
            WidgetBoard::new(),
            Exporter::new(&self.export_dir),
        );
        controller.dispatch(Intent::Load)?;
        Ok(controller)
    }
}
