use crate::config::LinkConfig;
use crate::note::NoteId;
use crate::store::NoteStore;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Where a link token should point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LinkTarget {
    /// Exactly one note produced the token
    Note { id: NoteId },
    /// Several notes share the token; the reader has to pick one
    Disambiguation { ids: Vec<NoteId> },
}

impl LinkTarget {
    /// URL path used by the web client for this target
    pub fn href(&self) -> String {
        match self {
            LinkTarget::Note { id } => format!("/note/{id}"),
            LinkTarget::Disambiguation { ids } => {
                let joined: Vec<String> = ids.iter().map(NoteId::to_string).collect();
                format!("/disambiguation/{}", joined.join(","))
            }
        }
    }
}

/// Title tokens mapped to the notes that produced them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LinkMap {
    tokens: BTreeMap<String, BTreeSet<NoteId>>,
}

impl LinkMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `id` with `token`
    pub fn insert(&mut self, token: impl Into<String>, id: NoteId) {
        self.tokens.entry(token.into()).or_default().insert(id);
    }

    pub fn get(&self, token: &str) -> Option<&BTreeSet<NoteId>> {
        self.tokens.get(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains_key(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<NoteId>)> {
        self.tokens.iter().map(|(token, ids)| (token.as_str(), ids))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Link target for a token, if any note produced it
    pub fn target(&self, token: &str) -> Option<LinkTarget> {
        let ids = self.tokens.get(token)?;
        match ids.len() {
            0 => None,
            1 => ids.iter().next().map(|&id| LinkTarget::Note { id }),
            _ => Some(LinkTarget::Disambiguation {
                ids: ids.iter().copied().collect(),
            }),
        }
    }
}

/// Tokens a single title contributes: the full title, then each long enough word
pub fn title_tokens<'t>(title: &'t str, config: &LinkConfig) -> Vec<&'t str> {
    let mut tokens = vec![title];
    tokens.extend(
        title
            .split_whitespace()
            .filter(|word| word.chars().count() >= config.min_word_len),
    );
    tokens
}

/// Build the title link map with default settings
pub fn build_link_map(store: &NoteStore) -> LinkMap {
    build_link_map_with(store, &LinkConfig::default())
}

/// Build the title link map
#[tracing::instrument(
    skip(store, config),
    fields(notes = store.len(), min_word_len = config.min_word_len)
)]
pub fn build_link_map_with(store: &NoteStore, config: &LinkConfig) -> LinkMap {
    let mut links = LinkMap::new();
    for note in store.iter() {
        for token in title_tokens(&note.title, config) {
            links.insert(token, note.id);
        }
    }
    tracing::debug!(tokens = links.len(), "built link map");
    links
}
