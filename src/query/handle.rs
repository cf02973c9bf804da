//! Per-view query handle
//!
//! A `Query<T>` tracks one current key. Changing the key resets the state
//! to `Loading` (no stale value is shown) and resolves the new key on a
//! worker thread. Results travel back over a channel tagged with the
//! generation that requested them; anything not matching the current
//! generation is discarded. Dropping the handle drops the receiver, so a
//! result that arrives after the view is gone is never applied.

use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::thread;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;

use super::client::QueryClient;
use super::state::RemoteQuery;
use crate::api::ApiError;
use crate::api::error::Result;

struct Resolution<T> {
    generation: u64,
    outcome: Result<T>,
}

/// Keyed remote value observed through `RemoteQuery`
pub struct Query<T> {
    client: QueryClient,
    key: Option<String>,
    generation: u64,
    state: RemoteQuery<T>,
    tx: Sender<Resolution<T>>,
    rx: Receiver<Resolution<T>>,
}

impl<T: DeserializeOwned + Send + 'static> Query<T> {
    /// Create a handle with no key; its state is `Loading`
    #[must_use]
    pub fn new(client: QueryClient) -> Self {
        let (tx, rx) = channel();
        Self {
            client,
            key: None,
            generation: 0,
            state: RemoteQuery::Loading,
            tx,
            rx,
        }
    }

    /// Point the query at `key`
    ///
    /// Returns `false` and does nothing when `key` is already current, so
    /// repeated renders with the same key never trigger another fetch.
    pub fn set_key(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.key.as_deref() == Some(key.as_str()) {
            return false;
        }

        self.generation += 1;
        self.state = RemoteQuery::Loading;
        tracing::debug!(%key, generation = self.generation, "query key changed");

        let generation = self.generation;
        let client = self.client.clone();
        let tx = self.tx.clone();
        let worker_key = key.clone();

        let spawned = thread::Builder::new()
            .name("elbi-fetch".into())
            .spawn(move || {
                let outcome = client.fetch_as::<T>(&worker_key);
                // The receiver is gone once the view has been dropped
                let _ = tx.send(Resolution { generation, outcome });
            });

        if let Err(e) = spawned {
            tracing::warn!(%key, error = %e, "could not start fetch worker");
            self.state = RemoteQuery::Failed(ApiError::request_failed(&key, e));
        }

        self.key = Some(key);
        true
    }

    /// Apply any results that have arrived; returns `true` if the state changed
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(resolution) = self.rx.try_recv() {
            changed |= self.apply(resolution);
        }
        changed
    }

    /// Block until the current key resolves or `timeout` elapses
    ///
    /// Returns `true` if the query is no longer loading.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        self.poll();

        while self.state.is_loading() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(resolution) => {
                    self.apply(resolution);
                }
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => break,
            }
        }

        !self.state.is_loading()
    }

    fn apply(&mut self, resolution: Resolution<T>) -> bool {
        if resolution.generation != self.generation {
            tracing::debug!(
                stale = resolution.generation,
                current = self.generation,
                "discarding stale query result"
            );
            return false;
        }
        self.state = resolution.outcome.into();
        true
    }
}

impl<T> Query<T> {
    #[must_use]
    pub const fn state(&self) -> &RemoteQuery<T> {
        &self.state
    }
}
