//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotedConfig {
    /// Search ranking configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Title link configuration
    #[serde(default)]
    pub links: LinkConfig,
}

/// Configuration for search ranking parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Weight of a title match (default 1.0)
    #[serde(default = "default_title_weight")]
    pub title_weight: f64,

    /// Weight of a tag match (default 0.8)
    #[serde(default = "default_tags_weight")]
    pub tags_weight: f64,

    /// Weight of a body match (default 0.5)
    #[serde(default = "default_body_weight")]
    pub body_weight: f64,

    /// Hits scoring below this normalized relevance are dropped (default 0.4)
    #[serde(default = "default_min_relevance")]
    pub min_relevance: f64,

    /// Apply English stemming to query and documents (default true)
    #[serde(default = "default_stemming")]
    pub stemming: bool,

    /// Maximum number of hits returned (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// Configuration for title link tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Shortest title word, in characters, that becomes a link token (default 4)
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            title_weight: default_title_weight(),
            tags_weight: default_tags_weight(),
            body_weight: default_body_weight(),
            min_relevance: default_min_relevance(),
            stemming: default_stemming(),
            limit: None,
        }
    }
}

impl SearchConfig {
    /// Largest of the three field weights
    pub fn max_weight(&self) -> f64 {
        self.title_weight.max(self.tags_weight).max(self.body_weight)
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            min_word_len: default_min_word_len(),
        }
    }
}

fn default_title_weight() -> f64 {
    1.0
}

fn default_tags_weight() -> f64 {
    0.8
}

fn default_body_weight() -> f64 {
    0.5
}

fn default_min_relevance() -> f64 {
    0.4
}

fn default_stemming() -> bool {
    true
}

fn default_min_word_len() -> usize {
    4
}
