//! Note records as delivered by the notes API

mod parent;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NotedError;

/// Backend-assigned note identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl NoteId {
    pub fn new(id: i64) -> Self {
        NoteId(id)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for NoteId {
    fn from(id: i64) -> Self {
        NoteId(id)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = NotedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(NoteId)
            .map_err(|_| NotedError::invalid_value("note id", s))
    }
}

/// A single note
///
/// `parent_note_id` is `None` for top-level notes. The API spells "no parent"
/// as `0`, `null` or a missing field; all three deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, with = "parent")]
    pub parent_note_id: Option<NoteId>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub user_id: i64,
}

impl Note {
    /// Create a top-level note with empty body and no tags
    pub fn new(id: impl Into<NoteId>, title: impl Into<String>) -> Self {
        Note {
            id: id.into(),
            title: title.into(),
            body: String::new(),
            tags: Vec::new(),
            parent_note_id: None,
            archived: false,
            pinned: false,
            updated_at: String::new(),
            created_at: String::new(),
            user_id: 0,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the parent; `0` means top-level, same as on the wire
    pub fn with_parent(mut self, parent: impl Into<NoteId>) -> Self {
        let parent = parent.into();
        self.parent_note_id = (parent.0 != 0).then_some(parent);
        self
    }

    pub fn with_updated_at(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = updated_at.into();
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }
}
