//! Pagination module
//!
//! Walks a cursor-paginated items listing one page at a time.
//!
//! # Overview
//!
//! A [`PageSource`] fetches single pages; [`ItemsClient`](crate::ItemsClient)
//! is the HTTP implementation. A [`PageWalker`] drives a source, following
//! the `next` (or `previous`) cursor of each response so that page requests
//! are strictly serialized.

mod types;
mod walker;

pub use types::PageSource;
pub use walker::PageWalker;
