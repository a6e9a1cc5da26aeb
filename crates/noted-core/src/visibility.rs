//! Archive flags used to filter note lists
//!
//! The default list shows notes that are not archived. The archive list shows
//! every note that is archived or has an archived note somewhere beneath it,
//! so the path down to an archived note stays visible.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::NotedError;
use crate::note::NoteId;
use crate::sort::sorted_ids;
use crate::store::NoteStore;
use crate::tree::ancestor_chain;

/// One flag per note id; every note in the store has an entry
pub type VisibilityMap = BTreeMap<NoteId, bool>;

/// `true` for every note that is not itself archived
pub fn is_not_archived(store: &NoteStore) -> VisibilityMap {
    store
        .iter()
        .map(|note| (note.id, !note.archived))
        .collect()
}

/// `true` for every archived note and every ancestor of one
#[tracing::instrument(skip(store), fields(notes = store.len()))]
pub fn has_archived_in_subtree_or_self(store: &NoteStore) -> VisibilityMap {
    let mut flags: VisibilityMap = store.ids().map(|id| (id, false)).collect();

    for note in store.iter().filter(|note| note.archived) {
        flags.insert(note.id, true);
        for ancestor in ancestor_chain(note, store) {
            // Another archived note already marked the rest of this chain
            if flags.insert(ancestor.id, true) == Some(true) {
                break;
            }
        }
    }

    flags
}

/// Which note list is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Everything not archived
    #[default]
    Default,
    /// Archived notes and the notes containing them
    Archive,
}

impl FromStr for View {
    type Err = NotedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(View::Default),
            "archive" => Ok(View::Archive),
            other => Err(NotedError::invalid_value("view", other)),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Default => write!(f, "default"),
            View::Archive => write!(f, "archive"),
        }
    }
}

impl View {
    /// Visibility flags this view filters on
    pub fn flags(self, store: &NoteStore) -> VisibilityMap {
        match self {
            View::Default => is_not_archived(store),
            View::Archive => has_archived_in_subtree_or_self(store),
        }
    }
}

/// Sorted note ids shown by `view`
pub fn visible_ids(store: &NoteStore, view: View) -> Vec<NoteId> {
    filter_visible(&sorted_ids(store), &view.flags(store))
}

/// Keep the ids whose flag is set, preserving order
pub fn filter_visible(ids: &[NoteId], flags: &VisibilityMap) -> Vec<NoteId> {
    ids.iter()
        .copied()
        .filter(|id| flags.get(id).copied().unwrap_or(false))
        .collect()
}
