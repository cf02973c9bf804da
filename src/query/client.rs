//! Shared response cache with request coalescing
//!
//! `QueryClient` sits between views and the `Fetcher`. It keys responses by
//! their full URL in a bounded moka cache. `try_get_with` guarantees at most
//! one in-flight fetch per key: concurrent callers for the same URL wait for
//! that fetch and share its outcome. Failures are never cached.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::error::Result;
use crate::api::{ApiError, Fetcher};

/// Sizing of the response cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    /// Maximum number of cached responses
    pub capacity: u64,
    /// How long a response stays fresh
    pub ttl: Duration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            capacity: 64,
            ttl: Duration::from_secs(300),
        }
    }
}

/// Cheaply cloneable handle to the fetcher and its response cache
#[derive(Clone)]
pub struct QueryClient {
    fetcher: Arc<dyn Fetcher>,
    cache: Cache<String, Arc<Value>>,
}

impl QueryClient {
    #[must_use]
    pub fn new(fetcher: Arc<dyn Fetcher>, settings: CacheSettings) -> Self {
        let cache = Cache::builder()
            .max_capacity(settings.capacity)
            .time_to_live(settings.ttl)
            .build();

        Self { fetcher, cache }
    }

    /// Fetch the JSON body for `key`, reusing a fresh or in-flight response
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RequestFailed` if the underlying fetch fails.
    pub fn fetch(&self, key: &str) -> Result<Arc<Value>> {
        self.cache
            .try_get_with(key.to_string(), || self.fetcher.get_json(key).map(Arc::new))
            .map_err(|e| (*e).clone())
    }

    /// Fetch `key` and decode it as `T`
    ///
    /// A body that does not decode as `T` is evicted and reported as
    /// `RequestFailed`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RequestFailed` if the fetch or the decoding fails.
    pub fn fetch_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.fetch(key)?;
        T::deserialize(value.as_ref()).map_err(|e| {
            tracing::warn!(url = %key, error = %e, "unexpected response shape");
            self.cache.invalidate(key);
            ApiError::request_failed(key, e)
        })
    }

    /// Drop any cached response for `key`
    pub fn invalidate(&self, key: &str) {
        self.cache.invalidate(key);
    }

    /// True when a response for `key` is cached
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.cache.contains_key(key)
    }
}

impl std::fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryClient")
            .field("cached", &self.cache.entry_count())
            .finish_non_exhaustive()
    }
}
