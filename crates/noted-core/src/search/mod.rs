//! Weighted term search over derived documents
//!
//! Each document is a note merged with everything beneath it, so a query
//! matching a child also finds every ancestor of that child. Titles weigh
//! more than tags, and tags more than body text.

use serde::Serialize;
use std::collections::HashSet;

use crate::config::SearchConfig;
use crate::index::{filtered_search_index, DerivedDocument, SearchIndex};
use crate::note::NoteId;
use crate::store::NoteStore;
use crate::text::Tokenizer;

/// Fraction of a field's weight earned when a document term only starts with
/// the query term
const PREFIX_FACTOR: f64 = 0.5;

/// One matching note
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub id: NoteId,
    /// Normalized score in `[0, 1]`
    pub relevance: f64,
}

/// Terms of one document, per field
struct FieldTerms {
    title: HashSet<String>,
    tags: HashSet<String>,
    body: HashSet<String>,
}

impl FieldTerms {
    fn new(doc: &DerivedDocument, tokenizer: &Tokenizer) -> Self {
        let terms = |text: &str| tokenizer.tokenize(text).into_iter().collect();
        Self {
            title: terms(&doc.title),
            tags: terms(&doc.tags.join(" ")),
            body: terms(&doc.body),
        }
    }
}

fn field_score(terms: &HashSet<String>, term: &str, weight: f64) -> f64 {
    if terms.contains(term) {
        weight
    } else if terms.iter().any(|candidate| candidate.starts_with(term)) {
        weight * PREFIX_FACTOR
    } else {
        0.0
    }
}

/// Runs queries against a search index with fixed ranking parameters
pub struct Searcher<'c> {
    config: &'c SearchConfig,
    tokenizer: Tokenizer,
}

impl<'c> Searcher<'c> {
    pub fn new(config: &'c SearchConfig) -> Self {
        Self {
            config,
            tokenizer: Tokenizer::new(config.stemming),
        }
    }

    /// Relevance of `doc` for already tokenized query terms
    fn score(&self, doc: &DerivedDocument, query_terms: &[String]) -> f64 {
        let max_weight = self.config.max_weight();
        if query_terms.is_empty() || max_weight <= 0.0 {
            return 0.0;
        }

        let fields = FieldTerms::new(doc, &self.tokenizer);
        let total: f64 = query_terms
            .iter()
            .map(|term| {
                field_score(&fields.title, term, self.config.title_weight)
                    .max(field_score(&fields.tags, term, self.config.tags_weight))
                    .max(field_score(&fields.body, term, self.config.body_weight))
            })
            .sum();

        total / (query_terms.len() as f64 * max_weight)
    }

    /// Hits at or above the relevance threshold, best first
    #[tracing::instrument(skip(self, index), fields(documents = index.len()))]
    pub fn search(&self, index: &SearchIndex, query: &str) -> Vec<SearchHit> {
        let query_terms = self.tokenizer.unique_terms(query);
        if query_terms.is_empty() {
            tracing::debug!("query has no searchable terms");
            return Vec::new();
        }

        let mut hits: Vec<SearchHit> = index
            .iter()
            .map(|(id, doc)| SearchHit {
                id,
                relevance: self.score(doc, &query_terms),
            })
            .filter(|hit| hit.relevance > 0.0 && hit.relevance >= self.config.min_relevance)
            .collect();

        hits.sort_by(|a, b| {
            b.relevance
                .total_cmp(&a.relevance)
                .then_with(|| a.id.cmp(&b.id))
        });
        if let Some(limit) = self.config.limit {
            hits.truncate(limit);
        }

        tracing::debug!(terms = query_terms.len(), hits = hits.len(), "search complete");
        hits
    }
}

/// Search a prebuilt index
pub fn search(index: &SearchIndex, query: &str, config: &SearchConfig) -> Vec<SearchHit> {
    Searcher::new(config).search(index, query)
}

/// Search the notes listed directly inside `scope` (top level for `None`)
pub fn search_scope(
    store: &NoteStore,
    scope: Option<NoteId>,
    query: &str,
    config: &SearchConfig,
) -> Vec<SearchHit> {
    search(&filtered_search_index(store, scope), query, config)
}

#[cfg(test)]
mod tests;
