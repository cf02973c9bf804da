//! Search text, debounced committed term and page index
//!
//! ```text
//! keystroke ──► input ──(quiet for `delay`)──► committed term ──► page := 1
//!                                                    │                │
//!                                                    ▼                ▼
//!                                              store["search"]   store["page"]
//! ```
//!
//! The controller is the only owner of this state. The injected store is
//! read once in `new` and written on every change; write failures are logged
//! and otherwise ignored.

use std::time::Duration;

use crate::api::{Endpoints, MoviePage};
use crate::query::{QueryStatus, RemoteQuery};
use crate::storage::{KeyValueStore, PAGE_KEY, SEARCH_TERM_KEY};
use crate::timer::{Clock, Debouncer};

/// The catalog never serves pages beyond this index
pub const MAX_PAGES: u32 = 500;

/// Owner of the list view's search state
pub struct SearchController<S, C> {
    store: S,
    clock: C,
    input: String,
    committed: String,
    page: u32,
    debounce: Debouncer<String>,
    last_total_pages: Option<u32>,
}

impl<S: KeyValueStore, C: Clock> SearchController<S, C> {
    /// Mount a controller, restoring the committed term and page from `store`
    ///
    /// The input box starts out showing the restored term. A missing or
    /// malformed page index restores as 1, one above the catalog limit as
    /// [`MAX_PAGES`].
    pub fn new(store: S, clock: C, delay: Duration) -> Self {
        let committed = read(&store, SEARCH_TERM_KEY).unwrap_or_default();
        let page = read(&store, PAGE_KEY)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|page| *page >= 1)
            .map_or(1, |page| page.min(MAX_PAGES));

        tracing::debug!(term = %committed, page, "search state restored");

        Self {
            store,
            clock,
            input: committed.clone(),
            committed,
            page,
            debounce: Debouncer::new(delay),
            last_total_pages: None,
        }
    }

    /// Replace the visible input text and restart the quiet period
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.debounce.schedule(self.input.clone(), self.clock.now());
    }

    /// Commit the input if the quiet period has elapsed
    ///
    /// Returns `true` when a commit happened on this call.
    pub fn tick(&mut self) -> bool {
        match self.debounce.take_due(self.clock.now()) {
            Some(term) => {
                self.commit(term);
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, term: String) {
        self.persist(SEARCH_TERM_KEY, &term);
        if term != self.committed {
            tracing::debug!(term = %term, "search term committed");
            self.committed = term;
            self.set_page(1);
        }
    }

    /// Record the total page count of the last successful listing
    pub fn observe(&mut self, state: &RemoteQuery<MoviePage>) {
        if let Some(page) = state.value() {
            self.last_total_pages = Some(page.total_pages);
        }
    }

    /// Highest reachable page according to the last successful listing
    #[must_use]
    pub fn page_limit(&self) -> Option<u32> {
        self.last_total_pages.map(|total| total.min(MAX_PAGES))
    }

    /// Whether "previous" is enabled for a query in `status`
    #[must_use]
    pub fn can_prev(&self, status: QueryStatus) -> bool {
        status == QueryStatus::Ready && self.page > 1
    }

    /// Whether "next" is enabled for a query in `status`
    #[must_use]
    pub fn can_next(&self, status: QueryStatus) -> bool {
        status == QueryStatus::Ready && self.page_limit().is_some_and(|limit| self.page < limit)
    }

    /// Go to the next page; no-op (returns `false`) when disabled
    pub fn next_page(&mut self, status: QueryStatus) -> bool {
        if !self.can_next(status) {
            return false;
        }
        self.set_page(self.page + 1);
        true
    }

    /// Go to the previous page; no-op (returns `false`) when disabled
    pub fn prev_page(&mut self, status: QueryStatus) -> bool {
        if !self.can_prev(status) {
            return false;
        }
        self.set_page(self.page - 1);
        true
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
        self.persist(PAGE_KEY, &page.to_string());
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!(key, error = %e, "failed to persist search state");
        }
    }

    /// Listing URL for the committed term and current page
    #[must_use]
    pub fn request_url(&self, endpoints: &Endpoints) -> String {
        endpoints.listing(&self.committed, self.page)
    }
}

impl<S, C> SearchController<S, C> {
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn committed_term(&self) -> &str {
        &self.committed
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// True while typed text is waiting out the quiet period
    #[must_use]
    pub const fn is_debouncing(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Cancel any pending commit; nothing is written after this
    pub fn teardown(&mut self) {
        self.debounce.cancel();
    }
}

impl<S, C> Drop for SearchController<S, C> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn read<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    store.get(key).unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "failed to read search state");
        None
    })
}
