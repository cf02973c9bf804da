//! Page-level views
//!
//! Each view is a three-state machine driven only by the `RemoteQuery` of
//! its active key:
//!
//! ```text
//!            key change
//!      ┌──────────────────────┐
//!      ▼                      │
//!  Loading ──ok──► Ready ─────┤
//!      │                      │
//!      └──err──► Error ───────┘
//! ```
//!
//! Rendering matches on [`ViewState`], so exactly one of the three is drawn.

mod detail;
mod list;

pub use detail::DetailView;
pub use list::ListView;

use std::sync::Arc;
use std::time::Duration;

use crate::api::{Endpoints, MovieId};
use crate::query::{QueryClient, RemoteQuery};
use crate::storage::KeyValueStore;

/// Store handle shared by every mount of the list view
pub type SharedStore = Arc<dyn KeyValueStore>;

/// What a view needs to mount
#[derive(Clone)]
pub struct ViewContext<C> {
    pub client: QueryClient,
    pub endpoints: Endpoints,
    pub store: SharedStore,
    pub clock: C,
    pub debounce: Duration,
}

/// Rendered state of a view
#[derive(Debug, PartialEq)]
pub enum ViewState<'a, T> {
    Loading,
    Error,
    Ready(&'a T),
}

impl<'a, T> From<&'a RemoteQuery<T>> for ViewState<'a, T> {
    fn from(query: &'a RemoteQuery<T>) -> Self {
        match query {
            RemoteQuery::Loading => Self::Loading,
            RemoteQuery::Failed(_) => Self::Error,
            RemoteQuery::Ready(value) => Self::Ready(value),
        }
    }
}

/// What the application shell should do after a view handled a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Stay,
    /// Navigate to the detail page of a movie
    Open(MovieId),
    /// Navigate back to the list
    Home,
    Quit,
}
