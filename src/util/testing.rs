// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteStore;
use crate::domain::{DomainError, Note};

/// Shared mock store for testing code that depends on NoteStore
///
/// Keeps the collection in memory, counts writes and can be told to fail
/// on load the way a corrupted blob would.
///
/// # Examples
///
/// ```
/// use stickynotes::util::testing::MockNoteStore;
/// use stickynotes::domain::Note;
///
/// let mock = MockNoteStore::builder()
///     .with_note(Note::new(1, "hello"))
///     .build();
/// assert_eq!(mock.notes().len(), 1);
/// assert_eq!(mock.save_count(), 0);
/// ```
pub struct MockNoteStore {
    notes: Vec<Note>,
    fail_on_load: bool,
    save_count: usize,
}

impl MockNoteStore {
    pub fn builder() -> MockNoteStoreBuilder {
        MockNoteStoreBuilder::new()
    }

    /// Stored collection in storage order
    pub fn notes(&self) -> Vec<Note> {
        self.notes.clone()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl NoteStore for MockNoteStore {
    fn load(&mut self) -> Result<Vec<Note>, DomainError> {
        if self.fail_on_load {
            return Err(DomainError::MalformedStore(
                "mock store configured to fail".to_string(),
            ));
        }
        Ok(self.notes.clone())
    }

    fn save(&mut self, notes: &[Note]) -> Result<(), DomainError> {
        self.notes = notes.to_vec();
        self.save_count += 1;
        Ok(())
    }
}

/// Builder for MockNoteStore
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteStoreBuilder {
    notes: Vec<Note>,
    fail_on_load: bool,
}

impl MockNoteStoreBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            fail_on_load: false,
        }
    }

    /// Append a note to the initial collection
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes.extend(notes);
        self
    }

    /// Make every load fail with MalformedStore
    pub fn with_load_failure(mut self) -> Self {
        self.fail_on_load = true;
        self
    }

    pub fn build(self) -> MockNoteStore {
        MockNoteStore {
            notes: self.notes,
            fail_on_load: self.fail_on_load,
            save_count: 0,
        }
    }
}

impl Default for MockNoteStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["rstest"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
