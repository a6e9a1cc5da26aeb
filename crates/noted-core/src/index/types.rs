use serde::Serialize;
use std::collections::BTreeMap;

use crate::note::{Note, NoteId};
use crate::tree::in_scope;

/// A note merged with its whole subtree, used only for matching
///
/// Same shape as [`Note`]; `title`, `body` and `tags` carry the subtree text,
/// every other field is the keyed note's own.
pub type DerivedDocument = Note;

/// Derived documents keyed by note id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchIndex {
    pub(crate) documents: BTreeMap<NoteId, DerivedDocument>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: NoteId) -> Option<&DerivedDocument> {
        self.documents.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NoteId, &DerivedDocument)> {
        self.documents.iter().map(|(id, doc)| (*id, doc))
    }

    pub fn documents(&self) -> impl Iterator<Item = &DerivedDocument> {
        self.documents.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = NoteId> + '_ {
        self.documents.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents whose note sits directly inside `scope` (`None` or 0: top level)
    pub fn filtered(&self, scope: Option<NoteId>) -> SearchIndex {
        SearchIndex {
            documents: self
                .documents
                .iter()
                .filter(|(_, doc)| in_scope(doc, scope))
                .map(|(id, doc)| (*id, doc.clone()))
                .collect(),
        }
    }
}

impl FromIterator<DerivedDocument> for SearchIndex {
    fn from_iter<I: IntoIterator<Item = DerivedDocument>>(iter: I) -> Self {
        SearchIndex {
            documents: iter.into_iter().map(|doc| (doc.id, doc)).collect(),
        }
    }
}
