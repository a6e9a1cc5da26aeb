//! In-memory note store
//!
//! The store is a snapshot of the notes the API returned for the signed-in
//! user. Derivations take it by reference and never mutate it; the lifecycle
//! methods here exist for the code that talks to the API.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{NotedError, Result};
use crate::note::{Note, NoteId};

/// Notes keyed by id, iterated in ascending id order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: BTreeMap<NoteId, Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a list response; a repeated id replaces the earlier entry
    pub fn from_notes(notes: impl IntoIterator<Item = Note>) -> Self {
        let mut store = Self::new();
        store.replace_all(notes);
        store
    }

    /// Parse a JSON array of notes as returned by the list endpoint
    pub fn from_json_str(json: &str) -> Result<Self> {
        let notes: Vec<Note> = serde_json::from_str(json)?;
        Ok(Self::from_notes(notes))
    }

    /// Load a snapshot file containing a JSON array of notes
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| NotedError::InvalidSnapshot {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;
        let store = Self::from_json_str(&content)?;
        tracing::debug!(notes = store.len(), "loaded snapshot");
        Ok(store)
    }

    /// All notes, ascending id
    pub fn get_all(&self) -> Vec<&Note> {
        self.notes.values().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = NoteId> + '_ {
        self.notes.keys().copied()
    }

    pub fn get_by_id(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.notes.contains_key(&id)
    }

    /// Direct children of `parent_id`, ascending id. A note naming itself as
    /// its parent is not its own child.
    pub fn get_children(&self, parent_id: NoteId) -> Vec<&Note> {
        self.notes
            .values()
            .filter(|note| note.parent_note_id == Some(parent_id) && note.id != parent_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Replace the whole store (successful list fetch)
    pub fn replace_all(&mut self, notes: impl IntoIterator<Item = Note>) {
        self.notes = notes.into_iter().map(|note| (note.id, note)).collect();
    }

    /// Insert a created note or replace an updated one, returning the previous version
    pub fn upsert(&mut self, note: Note) -> Option<Note> {
        self.notes.insert(note.id, note)
    }

    /// Drop a deleted note. Children keep their (now dangling) parent reference.
    pub fn remove(&mut self, id: NoteId) -> Option<Note> {
        self.notes.remove(&id)
    }

    /// Forget everything (sign-out, authorization failure)
    pub fn clear(&mut self) {
        self.notes.clear();
    }
}

impl FromIterator<Note> for NoteStore {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        Self::from_notes(iter)
    }
}
