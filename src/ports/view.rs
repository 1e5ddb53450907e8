// src/ports/view.rs
use crate::application::Intent;
use crate::domain::Note;
use tracing::trace;

/// Identity of an attached widget, never reused within a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetHandle(u64);

/// Per-note controls next to the text area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Pin,
    Delete,
    Duplicate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteWidget {
    pub handle: WidgetHandle,
    pub note_id: i64,
    /// Current value of the editable text area
    pub text: String,
    pub pinned: bool,
    pub controls: [Control; 3],
}

/// Rendering seam driven by the controller. Holds no business state.
pub trait NoteView {
    /// Detach every widget, then attach one per note in the given order
    fn render_list(&mut self, notes: &[Note]);

    /// Create a widget for `note` and attach it after the existing ones
    fn render_note_widget(&mut self, note: &Note) -> WidgetHandle;

    /// Returns false when the handle is no longer attached
    fn detach(&mut self, handle: WidgetHandle) -> bool;

    /// Current value of the add-note input
    fn draft(&self) -> &str;

    fn set_draft(&mut self, value: &str);
}

/// In-memory widget tree standing in for the page's note container.
///
/// Besides implementing [`NoteView`] it lets callers act as the user: typing
/// into a widget or clicking one of its controls yields the intent the widget
/// would fire.
#[derive(Debug, Default)]
pub struct WidgetBoard {
    widgets: Vec<NoteWidget>,
    next_handle: u64,
    draft: String,
    search: String,
}

impl WidgetBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn widgets(&self) -> &[NoteWidget] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn widget(&self, handle: WidgetHandle) -> Option<&NoteWidget> {
        self.widgets.iter().find(|w| w.handle == handle)
    }

    /// First attached widget showing the given note
    pub fn widget_for(&self, note_id: i64) -> Option<&NoteWidget> {
        self.widgets.iter().find(|w| w.note_id == note_id)
    }

    /// Note ids in display order
    pub fn note_ids(&self) -> Vec<i64> {
        self.widgets.iter().map(|w| w.note_id).collect()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the text area's value, firing the per-keystroke edit intent
    pub fn type_into(&mut self, handle: WidgetHandle, text: &str) -> Option<Intent> {
        let widget = self.widgets.iter_mut().find(|w| w.handle == handle)?;
        widget.text = text.to_string();
        Some(Intent::EditKeystroke {
            id: widget.note_id,
            value: widget.text.clone(),
        })
    }

    pub fn click(&self, handle: WidgetHandle, control: Control) -> Option<Intent> {
        let widget = self.widget(handle)?;
        let id = widget.note_id;
        Some(match control {
            Control::Pin => Intent::PinClicked { id },
            Control::Delete => Intent::DeleteClicked { id, widget: handle },
            Control::Duplicate => Intent::DuplicateClicked { id },
        })
    }

    /// Replace the search field's value, firing the search intent
    pub fn type_search(&mut self, query: &str) -> Intent {
        self.search = query.to_string();
        Intent::SearchKeystroke(self.search.clone())
    }

    fn allocate_handle(&mut self) -> WidgetHandle {
        let handle = WidgetHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }
}

impl NoteView for WidgetBoard {
    fn render_list(&mut self, notes: &[Note]) {
        self.widgets.clear();
        for note in notes {
            self.render_note_widget(note);
        }
        trace!(widgets = self.widgets.len(), "Rendered list");
    }

    fn render_note_widget(&mut self, note: &Note) -> WidgetHandle {
        let handle = self.allocate_handle();
        self.widgets.push(NoteWidget {
            handle,
            note_id: note.id,
            text: note.content.clone(),
            pinned: note.fixed,
            controls: [Control::Pin, Control::Delete, Control::Duplicate],
        });
        handle
    }

    fn detach(&mut self, handle: WidgetHandle) -> bool {
        let before = self.widgets.len();
        self.widgets.retain(|w| w.handle != handle);
        before != self.widgets.len()
    }

    fn draft(&self) -> &str {
        &self.draft
    }

    fn set_draft(&mut self, value: &str) {
        self.draft = value.to_string();
    }
}
