//! Search and pagination state for the list view
//!
//! [`SearchController`] owns the typed input, the debounced committed term
//! and the page index, derives the listing URL from them and mirrors the
//! committed term and page into durable storage.

mod controller;

pub use controller::{MAX_PAGES, SearchController};
