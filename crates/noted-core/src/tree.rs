//! Parent/child walks over a note store
//!
//! Nothing in the data guarantees the parent graph is acyclic, so every
//! upward walk carries its own visited set.

use std::collections::HashSet;

use crate::note::{Note, NoteId};
use crate::store::NoteStore;

/// True when the note names a (non-zero) parent
pub fn has_parent(note: &Note) -> bool {
    note.parent_note_id.is_some_and(|id| id.value() != 0)
}

/// Lazy walk from a note's parent up to the root of its tree
///
/// Stops at a note without a parent, at a parent id missing from the store,
/// or when a note would be visited twice.
pub struct AncestorChain<'a> {
    store: &'a NoteStore,
    next: Option<NoteId>,
    visited: HashSet<NoteId>,
}

impl<'a> Iterator for AncestorChain<'a> {
    type Item = &'a Note;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;
        if !self.visited.insert(id) {
            tracing::warn!(note_id = %id, "parent cycle detected, stopping ancestor walk");
            return None;
        }
        let note = self.store.get_by_id(id)?;
        if has_parent(note) {
            self.next = note.parent_note_id;
        }
        Some(note)
    }
}

/// Ancestors of `note`, nearest first. The note itself is never yielded.
pub fn ancestor_chain<'a>(note: &Note, store: &'a NoteStore) -> AncestorChain<'a> {
    let mut visited = HashSet::new();
    visited.insert(note.id);
    AncestorChain {
        store,
        next: if has_parent(note) {
            note.parent_note_id
        } else {
            None
        },
        visited,
    }
}

/// Notes whose parent is `parent_id`, excluding self-parented notes
pub fn direct_children(store: &NoteStore, parent_id: NoteId) -> Vec<&Note> {
    store.get_children(parent_id)
}

/// Notes listed "inside" a scope: top-level notes for `None` (or id 0),
/// direct children otherwise
pub fn scope_notes(store: &NoteStore, scope: Option<NoteId>) -> Vec<&Note> {
    match scope.filter(|id| id.value() != 0) {
        None => store.iter().filter(|note| !has_parent(note)).collect(),
        Some(parent_id) => direct_children(store, parent_id),
    }
}

/// True when `note` belongs to `scope` for search index filtering.
///
/// Same as [`scope_notes`] except that a note naming itself as parent is
/// inside its own scope.
pub fn in_scope(note: &Note, scope: Option<NoteId>) -> bool {
    match scope.filter(|id| id.value() != 0) {
        None => !has_parent(note),
        Some(parent_id) => note.parent_note_id == Some(parent_id),
    }
}
