//! Command implementations for noted

pub mod autolink;
pub mod dispatch;
pub mod index;
pub mod links;
pub mod list;
pub mod search;
