//! Noted Core Library
//!
//! Derived views over a snapshot of hierarchical notes: subtree search
//! documents, title link maps, archive visibility and recency order.

pub mod autolink;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod memo;
pub mod note;
pub mod search;
pub mod sort;
pub mod store;
pub mod text;
pub mod tree;
pub mod visibility;

pub use error::{NotedError, Result};
pub use note::{Note, NoteId};
pub use store::NoteStore;
