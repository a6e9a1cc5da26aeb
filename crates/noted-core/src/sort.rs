//! Recency order for note lists
//!
//! A parent looks as fresh as the most recently edited note directly beneath
//! it on any ancestor path, so touching a child bumps the row that contains it.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::note::{Note, NoteId};
use crate::store::NoteStore;
use crate::tree::{ancestor_chain, has_parent};

/// Effective `updated_at` per note id
pub type SortKeyMap = BTreeMap<NoteId, String>;

/// Seed every note with its own `updated_at`, then walk each ancestor chain
/// raising every ancestor to the timestamp of the note just below it.
/// Timestamps compare lexically.
pub fn sort_keys(store: &NoteStore) -> SortKeyMap {
    let mut keys: SortKeyMap = store
        .iter()
        .map(|note| (note.id, note.updated_at.clone()))
        .collect();

    for note in store.iter().filter(|note| has_parent(note)) {
        let mut below = note;
        for ancestor in ancestor_chain(note, store) {
            if let Some(key) = keys.get_mut(&ancestor.id) {
                if below.updated_at > *key {
                    key.clone_from(&below.updated_at);
                }
            }
            below = ancestor;
        }
    }

    keys
}

/// All note ids: pinned first, archived last, then freshest first, then by id
#[tracing::instrument(skip(store), fields(notes = store.len()))]
pub fn sorted_ids(store: &NoteStore) -> Vec<NoteId> {
    let keys = sort_keys(store);
    let mut notes: Vec<&Note> = store.iter().collect();
    notes.sort_by(|a, b| compare(a, b, &keys));
    notes.into_iter().map(|note| note.id).collect()
}

fn compare(a: &Note, b: &Note, keys: &SortKeyMap) -> Ordering {
    let key = |note: &Note| keys.get(&note.id).map(String::as_str).unwrap_or_default();

    b.pinned
        .cmp(&a.pinned)
        .then_with(|| a.archived.cmp(&b.archived))
        .then_with(|| key(b).cmp(key(a)))
        .then_with(|| a.id.cmp(&b.id))
}
