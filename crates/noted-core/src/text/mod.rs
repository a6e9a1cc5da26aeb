//! Word splitting shared by search queries and search documents

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::sync::OnceLock;

static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

fn stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into",
            "is", "it", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then",
            "there", "these", "they", "this", "to", "was", "will", "with",
        ]
        .into_iter()
        .collect()
    })
}

fn stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Whether `word` is dropped from queries and documents
pub fn is_stop_word(word: &str) -> bool {
    stop_words().contains(word)
}

/// Lowercases, splits on anything that is not alphanumeric, and drops stop words.
/// With `stem` set, each term is reduced to its English stem so "notes" finds "note".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    stem: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self { stem: true }
    }
}

impl Tokenizer {
    pub fn new(stem: bool) -> Self {
        Self { stem }
    }

    pub fn stems(&self) -> bool {
        self.stem
    }

    /// Terms of `text` in order of appearance, duplicates kept
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let words = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty() && !is_stop_word(word));

        if self.stem {
            let stemmer = stemmer();
            words.map(|word| stemmer.stem(word).into_owned()).collect()
        } else {
            words.map(str::to_owned).collect()
        }
    }

    /// Distinct terms of `text`, first occurrence order
    pub fn unique_terms(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.tokenize(text)
            .into_iter()
            .filter(|term| seen.insert(term.clone()))
            .collect()
    }
}
