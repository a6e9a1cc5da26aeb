//! Snapshot-keyed caching for the derivations
//!
//! A store snapshot is shared as `Arc<NoteStore>` and never mutated, so the
//! pointer identifies its contents. Each [`Memo`] keeps the result for the
//! last snapshot it saw and recomputes when handed a different one.

use std::sync::{Arc, Mutex, PoisonError};

use crate::config::LinkConfig;
use crate::index::{build_link_map_with, build_search_index, LinkMap, SearchIndex};
use crate::log_resource_metrics;
use crate::logging::ResourceMetrics;
use crate::note::NoteId;
use crate::sort;
use crate::store::NoteStore;
use crate::visibility::{self, filter_visible, View, VisibilityMap};

/// Cache of one derivation for the most recent snapshot
pub struct Memo<T> {
    // Holding the snapshot keeps its address from being reused
    last: Mutex<Option<(Arc<NoteStore>, Arc<T>)>>,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self {
            last: Mutex::new(None),
        }
    }
}

impl<T> Memo<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached result for `store`, computing it on a miss.
    /// The flag is `true` for a cache hit.
    pub fn get_or_compute(
        &self,
        store: &Arc<NoteStore>,
        compute: impl FnOnce(&NoteStore) -> T,
    ) -> (Arc<T>, bool) {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((cached_store, value)) = last.as_ref() {
            if Arc::ptr_eq(cached_store, store) {
                return (Arc::clone(value), true);
            }
        }

        let value = Arc::new(compute(store));
        *last = Some((Arc::clone(store), Arc::clone(&value)));
        (value, false)
    }

    /// Drop the cached snapshot and result
    pub fn clear(&self) {
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Memoized versions of every derivation over one stream of snapshots
#[derive(Default)]
pub struct Selectors {
    link_config: LinkConfig,
    search_index: Memo<SearchIndex>,
    link_map: Memo<LinkMap>,
    not_archived: Memo<VisibilityMap>,
    archived_in_subtree: Memo<VisibilityMap>,
    sorted_ids: Memo<Vec<NoteId>>,
    metrics: ResourceMetrics,
}

impl Selectors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link_config(link_config: LinkConfig) -> Self {
        Self {
            link_config,
            ..Self::default()
        }
    }

    fn select<T>(
        &self,
        memo: &Memo<T>,
        store: &Arc<NoteStore>,
        compute: impl FnOnce(&NoteStore) -> T,
    ) -> Arc<T> {
        let (value, hit) = memo.get_or_compute(store, compute);
        if hit {
            self.metrics.record_cache_hit();
        } else {
            self.metrics.record_cache_miss();
            self.metrics.record_notes(store.len());
        }
        value
    }

    pub fn search_index(&self, store: &Arc<NoteStore>) -> Arc<SearchIndex> {
        self.select(&self.search_index, store, build_search_index)
    }

    pub fn link_map(&self, store: &Arc<NoteStore>) -> Arc<LinkMap> {
        self.select(&self.link_map, store, |s| {
            build_link_map_with(s, &self.link_config)
        })
    }

    pub fn is_not_archived(&self, store: &Arc<NoteStore>) -> Arc<VisibilityMap> {
        self.select(&self.not_archived, store, visibility::is_not_archived)
    }

    pub fn has_archived_in_subtree_or_self(&self, store: &Arc<NoteStore>) -> Arc<VisibilityMap> {
        self.select(
            &self.archived_in_subtree,
            store,
            visibility::has_archived_in_subtree_or_self,
        )
    }

    pub fn sorted_ids(&self, store: &Arc<NoteStore>) -> Arc<Vec<NoteId>> {
        self.select(&self.sorted_ids, store, sort::sorted_ids)
    }

    /// Sorted ids shown by `view`, built from the cached derivations
    pub fn visible_ids(&self, store: &Arc<NoteStore>, view: View) -> Vec<NoteId> {
        let flags = match view {
            View::Default => self.is_not_archived(store),
            View::Archive => self.has_archived_in_subtree_or_self(store),
        };
        filter_visible(&self.sorted_ids(store), &flags)
    }

    pub fn metrics(&self) -> &ResourceMetrics {
        &self.metrics
    }

    pub fn log_metrics(&self) {
        log_resource_metrics!(self.metrics, "selectors");
    }

    /// Forget every cached result
    pub fn clear(&self) {
        self.search_index.clear();
        self.link_map.clear();
        self.not_archived.clear();
        self.archived_in_subtree.clear();
        self.sorted_ids.clear();
    }
}
