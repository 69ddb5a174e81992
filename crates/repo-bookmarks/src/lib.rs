//! Persistent bookmarks for saved repositories
//!
//! A small keyed store mapping repository id to a saved record. Records
//! round-trip back into the same domain shape the search client produces,
//! so bookmarked repositories render exactly like fresh search results.

pub mod bookmark;
pub mod store;

pub use bookmark::Bookmark;
pub use store::{default_store_path, BookmarkStore};
