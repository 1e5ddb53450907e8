// src/application/controller.rs
use crate::application::{Exporter, IdGenerator, NoteRepository, NoteStore};
use crate::domain::{DomainError, Note};
use crate::ports::view::{NoteView, WidgetHandle};
use std::path::PathBuf;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other(String),
}

/// User actions arriving from the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Initial page load
    Load,
    /// The add-note input changed
    DraftChanged(String),
    /// Key pressed while the add-note input has focus; Enter submits
    /// regardless of modifiers
    DraftKeyDown { key: Key, shift: bool },
    AddClicked,
    /// Fired on every keystroke in a note's text area with its full value
    EditKeystroke { id: i64, value: String },
    PinClicked { id: i64 },
    DeleteClicked { id: i64, widget: WidgetHandle },
    DuplicateClicked { id: i64 },
    SearchKeystroke(String),
    ExportClicked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The visible list was rebuilt
    Rendered,
    /// A note was created and its widget appended
    Added(Note),
    /// Storage changed without a re-render
    Persisted,
    Exported(PathBuf),
    /// Nothing happened, e.g. a key other than Enter
    Ignored,
}

/// Wires intents to repository operations and keeps the view in step
pub struct NoteController<S: NoteStore, G: IdGenerator, V: NoteView> {
    repository: NoteRepository<S, G>,
    view: V,
    exporter: Exporter,
}

impl<S: NoteStore, G: IdGenerator, V: NoteView> NoteController<S, G, V> {
    pub fn new(repository: NoteRepository<S, G>, view: V, exporter: Exporter) -> Self {
        Self {
            repository,
            view,
            exporter,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn repository(&mut self) -> &mut NoteRepository<S, G> {
        &mut self.repository
    }

    #[instrument(level = "debug", skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<Outcome, DomainError> {
        match intent {
            Intent::Load => self.show_all(),
            Intent::DraftChanged(text) => {
                self.view.set_draft(&text);
                Ok(Outcome::Ignored)
            }
            Intent::DraftKeyDown { key: Key::Enter, .. } | Intent::AddClicked => {
                self.add_from_draft()
            }
            Intent::DraftKeyDown { .. } => Ok(Outcome::Ignored),
            Intent::EditKeystroke { id, value } => {
                self.repository.update_content(id, &value)?;
                Ok(Outcome::Persisted)
            }
            Intent::PinClicked { id } => {
                self.repository.toggle_pin(id)?;
                self.show_all()
            }
            Intent::DeleteClicked { id, widget } => {
                self.repository.remove(id)?;
                if !self.view.detach(widget) {
                    debug!(?widget, "Widget already detached");
                }
                Ok(Outcome::Persisted)
            }
            Intent::DuplicateClicked { id } => match self.repository.duplicate(id)? {
                Some(copy) => {
                    self.view.render_note_widget(&copy);
                    Ok(Outcome::Added(copy))
                }
                None => Ok(Outcome::Ignored),
            },
            Intent::SearchKeystroke(query) => {
                let notes = self.repository.search(&query)?;
                debug!(%query, matches = notes.len(), "Search");
                self.view.render_list(&notes);
                Ok(Outcome::Rendered)
            }
            Intent::ExportClicked => {
                let notes = self.repository.list()?;
                let path = self.exporter.export(&notes)?;
                Ok(Outcome::Exported(path))
            }
        }
    }

    fn show_all(&mut self) -> Result<Outcome, DomainError> {
        let notes = self.repository.list()?;
        self.view.render_list(&notes);
        Ok(Outcome::Rendered)
    }

    fn add_from_draft(&mut self) -> Result<Outcome, DomainError> {
        let content = self.view.draft().to_string();
        let note = self.repository.add(&content)?;
        self.view.render_note_widget(&note);
        self.view.set_draft("");
        Ok(Outcome::Added(note))
    }
}
