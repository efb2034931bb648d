//! Note List State
//!
//! Ordered notes as last confirmed by the server.

use crate::error::{ApiError, ApiResult};
use crate::models::{Note, NoteId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new(notes: Vec<Note>) -> Self {
        let mut store = Self::default();
        store.replace_all(notes);
        store
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Swap in a freshly loaded list. Later duplicates of an id are dropped.
    pub fn replace_all(&mut self, notes: Vec<Note>) {
        self.notes.clear();
        for note in notes {
            if self.get(&note.id).is_none() {
                self.notes.push(note);
            }
        }
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    /// Append a server-confirmed note; an id already present is replaced in place
    pub fn append(&mut self, note: Note) {
        match self.notes.iter_mut().find(|n| n.id == note.id) {
            Some(existing) => *existing = note,
            None => self.notes.push(note),
        }
    }

    /// The note under `id` with importance inverted, ready to send as an update
    pub fn toggled(&self, id: &NoteId) -> ApiResult<Note> {
        self.get(id)
            .map(Note::with_importance_toggled)
            .ok_or_else(|| ApiError::NotFound(id.clone()))
    }

    /// Replace the entry with the same id, keeping its position
    pub fn replace(&mut self, note: Note) -> ApiResult<()> {
        let slot = self
            .notes
            .iter_mut()
            .find(|n| n.id == note.id)
            .ok_or_else(|| ApiError::NotFound(note.id.clone()))?;
        *slot = note;
        Ok(())
    }

    /// All notes, or only the important ones, in list order
    pub fn filter(&self, show_all: bool) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|n| show_all || n.important)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, important: bool) -> Note {
        Note { id: NoteId::new(id), content: format!("Note {}", id), important }
    }

    #[test]
    fn test_replace_all_and_append() {
        let mut store = NoteStore::default();
        store.replace_all(vec![note("1", true), note("2", false)]);
        assert_eq!(store.len(), 2);

        store.append(note("3", false));
        assert_eq!(store.len(), 3);
        assert_eq!(store.notes()[2].id.as_str(), "3");
    }

    #[test]
    fn test_ids_stay_unique() {
        let mut store = NoteStore::new(vec![note("1", true), note("1", false)]);
        assert_eq!(store.len(), 1);
        assert!(store.notes()[0].important);

        store.append(Note { content: "edited".into(), ..note("1", false) });
        assert_eq!(store.len(), 1);
        assert_eq!(store.notes()[0].content, "edited");
    }

    #[test]
    fn test_toggled_does_not_mutate() {
        let store = NoteStore::new(vec![note("1", false)]);
        let changed = store.toggled(&NoteId::new("1")).unwrap();

        assert!(changed.important);
        assert!(!store.notes()[0].important);
    }

    #[test]
    fn test_toggled_missing_id_is_not_found() {
        let store = NoteStore::new(vec![note("1", false)]);
        let err = store.toggled(&NoteId::new("9")).unwrap_err();
        assert_eq!(err, ApiError::NotFound(NoteId::new("9")));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut store = NoteStore::new(vec![note("1", false), note("2", false), note("3", false)]);
        store.replace(note("2", true)).unwrap();

        let ids: Vec<&str> = store.notes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert!(store.notes()[1].important);

        assert!(store.replace(note("4", true)).is_err());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_double_toggle_restores_note() {
        let mut store = NoteStore::new(vec![note("1", false), note("2", true)]);
        let original = store.clone();

        let once = store.toggled(&NoteId::new("2")).unwrap();
        store.replace(once).unwrap();
        let twice = store.toggled(&NoteId::new("2")).unwrap();
        store.replace(twice).unwrap();

        assert_eq!(store, original);
    }

    #[test]
    fn test_filter() {
        let store = NoteStore::new(vec![note("1", true), note("2", false), note("3", true)]);

        let filtered = store.filter(false);
        let important: Vec<&str> = filtered.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(important, ["1", "3"]);
        assert_eq!(store.filter(true), store.notes());
    }
}
