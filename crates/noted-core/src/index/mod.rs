//! Search index and title link map
//!
//! Both are rebuilt from a store snapshot; neither is persisted.

pub mod builder;
pub mod links;
pub mod types;

pub use builder::{build_search_index, filtered_search_index, SearchIndexBuilder};
pub use links::{build_link_map, build_link_map_with, title_tokens, LinkMap, LinkTarget};
pub use types::{DerivedDocument, SearchIndex};
