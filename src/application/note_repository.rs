// src/application/note_repository.rs
use crate::application::IdGenerator;
use crate::domain::{DomainError, Note};
use tracing::{debug, info, instrument};

/// Persistence port: the whole collection is read and written as one unit
pub trait NoteStore {
    /// Load every stored note in storage order; an absent blob is an empty collection
    fn load(&mut self) -> Result<Vec<Note>, DomainError>;

    /// Replace the stored collection with `notes`
    fn save(&mut self, notes: &[Note]) -> Result<(), DomainError>;
}

/// Note operations, each a full read-modify-write against the store.
///
/// Operations naming an id that is not stored are no-ops rather than errors.
/// When legacy data holds duplicate ids, edits and pins reach the first match
/// while `remove` drops every match.
pub struct NoteRepository<S: NoteStore, G: IdGenerator> {
    store: S,
    ids: G,
}

impl<S: NoteStore, G: IdGenerator> NoteRepository<S, G> {
    pub fn new(store: S, ids: G) -> Self {
        Self { store, ids }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All notes, pinned first
    #[instrument(level = "debug", skip(self))]
    pub fn list(&mut self) -> Result<Vec<Note>, DomainError> {
        let mut notes = self.store.load()?;
        sort_pinned_first(&mut notes);
        Ok(notes)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn find_by_id(&mut self, id: i64) -> Result<Option<Note>, DomainError> {
        Ok(self.store.load()?.into_iter().find(|n| n.id == id))
    }

    #[instrument(level = "debug", skip(self, content))]
    pub fn add(&mut self, content: &str) -> Result<Note, DomainError> {
        let mut notes = self.store.load()?;
        let note = Note::new(self.ids.next_id(&notes), content);
        notes.push(note.clone());
        self.store.save(&notes)?;

        info!(note_id = note.id, "Added note");
        Ok(note)
    }

    /// Copy a note's content into a new unpinned note
    #[instrument(level = "debug", skip(self))]
    pub fn duplicate(&mut self, id: i64) -> Result<Option<Note>, DomainError> {
        let mut notes = self.store.load()?;
        let Some(content) = notes.iter().find(|n| n.id == id).map(|n| n.content.clone()) else {
            debug!(note_id = id, "Nothing to duplicate");
            return Ok(None);
        };

        let copy = Note::new(self.ids.next_id(&notes), content);
        notes.push(copy.clone());
        self.store.save(&notes)?;

        info!(source_id = id, note_id = copy.id, "Duplicated note");
        Ok(Some(copy))
    }

    #[instrument(level = "trace", skip(self, content))]
    pub fn update_content(&mut self, id: i64, content: &str) -> Result<(), DomainError> {
        let mut notes = self.store.load()?;
        let Some(note) = notes.iter_mut().find(|n| n.id == id) else {
            debug!(note_id = id, "Nothing to update");
            return Ok(());
        };

        note.content = content.to_string();
        self.store.save(&notes)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn toggle_pin(&mut self, id: i64) -> Result<(), DomainError> {
        let mut notes = self.store.load()?;
        let Some(note) = notes.iter_mut().find(|n| n.id == id) else {
            debug!(note_id = id, "Nothing to pin");
            return Ok(());
        };

        note.fixed = !note.fixed;
        let fixed = note.fixed;
        self.store.save(&notes)?;

        info!(note_id = id, fixed, "Toggled pin");
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, id: i64) -> Result<(), DomainError> {
        let mut notes = self.store.load()?;
        let before = notes.len();
        notes.retain(|n| n.id != id);
        self.store.save(&notes)?;

        info!(note_id = id, removed = before - notes.len(), "Removed note");
        Ok(())
    }

    /// Pinned-first notes whose content contains `query`, ignoring case.
    /// An empty query yields the full list.
    #[instrument(level = "debug", skip(self))]
    pub fn search(&mut self, query: &str) -> Result<Vec<Note>, DomainError> {
        let notes = self.list()?;
        if query.is_empty() {
            return Ok(notes);
        }
        Ok(notes.into_iter().filter(|n| n.matches(query)).collect())
    }
}

/// Stable partition: pinned notes ahead of unpinned ones
pub fn sort_pinned_first(notes: &mut [Note]) {
    notes.sort_by_key(|n| !n.fixed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SequentialIdGenerator;
    use crate::util::testing::MockNoteStore;

    fn note(id: i64, content: &str, fixed: bool) -> Note {
        Note {
            id,
            content: content.to_string(),
            fixed,
        }
    }

    fn repository(notes: Vec<Note>) -> NoteRepository<MockNoteStore, SequentialIdGenerator> {
        let store = MockNoteStore::builder().with_notes(notes).build();
        NoteRepository::new(store, SequentialIdGenerator)
    }

    #[test]
    fn given_empty_store_when_adding_then_persists_unpinned_note() {
        // Arrange
        let mut repo = repository(vec![]);

        // Act
        let added = repo.add("hello").expect("Add should succeed");

        // Assert
        assert_eq!(added.content, "hello");
        assert!(!added.fixed);
        assert_eq!(repo.store().notes(), vec![added]);
        assert_eq!(repo.store().save_count(), 1);
    }

    #[test]
    fn given_mixed_notes_when_listing_then_pinned_come_first() {
        // Arrange
        let mut repo = repository(vec![
            note(1, "a", false),
            note(2, "b", true),
            note(3, "c", false),
            note(4, "d", true),
        ]);

        // Act
        let listed = repo.list().expect("List should succeed");

        // Assert
        let ids: Vec<i64> = listed.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn given_listing_when_done_then_storage_order_is_untouched() {
        let mut repo = repository(vec![note(1, "a", false), note(2, "b", true)]);

        repo.list().expect("List should succeed");

        assert_eq!(repo.store().notes()[0].id, 1);
        assert_eq!(repo.store().save_count(), 0);
    }

    #[test]
    fn given_existing_note_when_updating_content_then_find_returns_new_content() {
        // Arrange
        let mut repo = repository(vec![note(1, "old", false)]);

        // Act
        repo.update_content(1, "new").expect("Update should succeed");

        // Assert
        let found = repo.find_by_id(1).expect("Find should succeed");
        assert_eq!(found.map(|n| n.content), Some("new".to_string()));
    }

    #[test]
    fn given_missing_note_when_updating_then_nothing_is_written() {
        let mut repo = repository(vec![note(1, "old", false)]);

        repo.update_content(99, "new").expect("Update should succeed");

        assert_eq!(repo.store().save_count(), 0);
        assert_eq!(repo.store().notes(), vec![note(1, "old", false)]);
    }

    #[test]
    fn given_note_when_toggling_pin_twice_then_flag_is_restored() {
        // Arrange
        let mut repo = repository(vec![note(1, "a", false)]);

        // Act
        repo.toggle_pin(1).expect("Toggle should succeed");
        let after_first = repo.find_by_id(1).expect("Find should succeed");
        repo.toggle_pin(1).expect("Toggle should succeed");
        let after_second = repo.find_by_id(1).expect("Find should succeed");

        // Assert
        assert_eq!(after_first.map(|n| n.fixed), Some(true));
        assert_eq!(after_second.map(|n| n.fixed), Some(false));
    }

    #[test]
    fn given_missing_note_when_toggling_pin_then_is_noop() {
        let mut repo = repository(vec![note(1, "a", false)]);

        repo.toggle_pin(2).expect("Toggle should succeed");

        assert_eq!(repo.store().save_count(), 0);
    }

    #[test]
    fn given_pinned_note_when_duplicating_then_copy_is_unpinned_with_fresh_id() {
        // Arrange
        let mut repo = repository(vec![note(5, "hello", true)]);

        // Act
        let copy = repo
            .duplicate(5)
            .expect("Duplicate should succeed")
            .expect("Source exists");

        // Assert
        assert_eq!(copy.content, "hello");
        assert_eq!(copy.id, 6);
        assert!(!copy.fixed);
        assert_eq!(repo.store().notes().len(), 2);
    }

    #[test]
    fn given_missing_note_when_duplicating_then_returns_none() {
        let mut repo = repository(vec![note(5, "hello", false)]);

        let copy = repo.duplicate(6).expect("Duplicate should succeed");

        assert!(copy.is_none());
        assert_eq!(repo.store().save_count(), 0);
    }

    #[test]
    fn given_missing_note_when_removing_then_collection_is_unchanged() {
        let mut repo = repository(vec![note(1, "a", false), note(2, "b", false)]);

        repo.remove(3).expect("Remove should succeed");

        assert_eq!(repo.store().notes().len(), 2);
    }

    #[test]
    fn given_adds_and_removes_when_counting_then_size_matches() {
        // Arrange
        let mut repo = repository(vec![]);
        let a = repo.add("a").expect("Add should succeed");
        let _b = repo.add("b").expect("Add should succeed");
        let c = repo.add("c").expect("Add should succeed");

        // Act
        repo.remove(a.id).expect("Remove should succeed");
        repo.remove(c.id).expect("Remove should succeed");
        repo.remove(12345).expect("Remove should succeed");

        // Assert
        assert_eq!(repo.list().expect("List should succeed").len(), 1);
    }

    #[test]
    fn given_duplicate_ids_when_removing_then_all_matches_are_dropped() {
        let mut repo = repository(vec![note(1, "a", false), note(1, "b", false)]);

        repo.remove(1).expect("Remove should succeed");

        assert!(repo.store().notes().is_empty());
    }

    #[test]
    fn given_query_when_searching_then_matches_content_ignoring_case() {
        // Arrange
        let mut repo = repository(vec![
            note(1, "this has foo in it", false),
            note(2, "bar", false),
            note(3, "FOO pinned", true),
        ]);

        // Act
        let found = repo.search("Foo").expect("Search should succeed");

        // Assert
        let ids: Vec<i64> = found.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn given_empty_query_when_searching_then_returns_full_list() {
        let mut repo = repository(vec![note(1, "a", false), note(2, "b", true)]);

        let found = repo.search("").expect("Search should succeed");
        let listed = repo.list().expect("List should succeed");

        assert_eq!(found, listed);
    }

    #[test]
    fn given_unmatched_query_when_searching_then_returns_nothing() {
        let mut repo = repository(vec![note(1, "a", false)]);

        let found = repo.search("zzz").expect("Search should succeed");

        assert!(found.is_empty());
    }

    #[test]
    fn given_failing_store_when_listing_then_error_propagates() {
        let store = MockNoteStore::builder().with_load_failure().build();
        let mut repo = NoteRepository::new(store, SequentialIdGenerator);

        let result = repo.list();

        assert!(matches!(result, Err(DomainError::MalformedStore(_))));
    }
}
