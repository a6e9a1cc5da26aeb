use super::types::{DerivedDocument, SearchIndex};
use crate::note::{Note, NoteId};
use crate::store::NoteStore;
use crate::tree::{has_parent, in_scope};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Instant;

/// Search index builder - merges every note with its subtree
///
/// Each derived document is computed once per builder and reused by every
/// ancestor that needs it.
pub struct SearchIndexBuilder<'a> {
    store: &'a NoteStore,
    children: HashMap<NoteId, Vec<&'a Note>>,
    merged: HashMap<NoteId, DerivedDocument>,
    in_progress: HashSet<NoteId>,
}

impl<'a> SearchIndexBuilder<'a> {
    pub fn new(store: &'a NoteStore) -> Self {
        SearchIndexBuilder {
            store,
            children: child_lists(store),
            merged: HashMap::with_capacity(store.len()),
            in_progress: HashSet::new(),
        }
    }

    /// Build the full index
    #[tracing::instrument(skip(self), fields(notes = self.store.len()))]
    pub fn build(mut self) -> SearchIndex {
        let start = Instant::now();
        for note in self.store.iter() {
            self.merge(note);
        }
        let documents: BTreeMap<_, _> = self.merged.into_iter().collect();
        crate::trace_time!(start, "build_search_index", documents = documents.len());
        SearchIndex { documents }
    }

    /// Build only the documents for notes inside `scope`
    ///
    /// Equivalent to `build().filtered(scope)` but only merges the subtrees
    /// under the scoped notes.
    #[tracing::instrument(skip(self), fields(notes = self.store.len(), scope = ?scope))]
    pub fn build_scope(mut self, scope: Option<NoteId>) -> SearchIndex {
        let store = self.store;
        let scoped: Vec<NoteId> = store
            .iter()
            .filter(|note| in_scope(note, scope))
            .map(|note| {
                self.merge(note);
                note.id
            })
            .collect();

        let documents = scoped
            .into_iter()
            .filter_map(|id| self.merged.remove(&id).map(|doc| (id, doc)))
            .collect();
        SearchIndex { documents }
    }

    /// Merge `root` and everything below it, children before parents.
    ///
    /// Walks with an explicit stack so deep parent chains cannot exhaust the
    /// thread stack.
    fn merge(&mut self, root: &'a Note) {
        if self.merged.contains_key(&root.id) {
            return;
        }
        let mut stack = vec![self.frame(root)];

        while let Some(frame) = stack.last_mut() {
            if let Some(&child) = frame.children.get(frame.cursor) {
                frame.cursor += 1;
                if self.in_progress.contains(&child.id) {
                    tracing::warn!(
                        note_id = %frame.doc.id,
                        child_id = %child.id,
                        "parent cycle detected, skipping child in search index"
                    );
                    continue;
                }
                match self.merged.get(&child.id) {
                    Some(child_doc) => {
                        append_document(&mut frame.doc, &mut frame.seen_tags, child_doc)
                    }
                    None => stack.push(self.frame(child)),
                }
                continue;
            }

            let Some(done) = stack.pop() else {
                break;
            };
            self.in_progress.remove(&done.doc.id);
            if let Some(parent) = stack.last_mut() {
                append_document(&mut parent.doc, &mut parent.seen_tags, &done.doc);
            }
            self.merged.insert(done.doc.id, done.doc);
        }
    }

    fn frame(&mut self, note: &'a Note) -> MergeFrame<'a> {
        self.in_progress.insert(note.id);
        let mut doc = note.clone();
        let mut seen_tags = HashSet::new();
        doc.tags.retain(|tag| seen_tags.insert(tag.clone()));
        MergeFrame {
            doc,
            seen_tags,
            children: self.children.get(&note.id).cloned().unwrap_or_default(),
            cursor: 0,
        }
    }
}

/// A note whose subtree is being merged, with a cursor into its children
struct MergeFrame<'a> {
    doc: DerivedDocument,
    seen_tags: HashSet<String>,
    children: Vec<&'a Note>,
    cursor: usize,
}

/// Direct children of every parent, ascending id within each list
fn child_lists(store: &NoteStore) -> HashMap<NoteId, Vec<&Note>> {
    let mut children: HashMap<NoteId, Vec<&Note>> = HashMap::new();
    for note in store.iter().filter(|note| has_parent(note)) {
        if let Some(parent_id) = note.parent_note_id.filter(|&id| id != note.id) {
            children.entry(parent_id).or_default().push(note);
        }
    }
    children
}

fn append_document(
    doc: &mut DerivedDocument,
    seen_tags: &mut HashSet<String>,
    child: &DerivedDocument,
) {
    doc.title.push(' ');
    doc.title.push_str(&child.title);
    doc.body.push(' ');
    doc.body.push_str(&child.body);
    for tag in &child.tags {
        if seen_tags.insert(tag.clone()) {
            doc.tags.push(tag.clone());
        }
    }
}

/// Merge every note with its descendants' titles, bodies and tags
pub fn build_search_index(store: &NoteStore) -> SearchIndex {
    SearchIndexBuilder::new(store).build()
}

/// Search index restricted to the notes directly inside `scope`
///
/// `None` and `Some(NoteId(0))` both select the top-level notes.
pub fn filtered_search_index(store: &NoteStore, scope: Option<NoteId>) -> SearchIndex {
    SearchIndexBuilder::new(store).build_scope(scope)
}
