//! Keyed remote data with request coalescing
//!
//! - [`QueryClient`]: shared response cache over a `Fetcher`, at most one
//!   in-flight fetch per URL
//! - [`Query`]: per-view handle that follows one key and exposes its state
//! - [`RemoteQuery`]: `Loading` / `Failed` / `Ready`

mod client;
mod handle;
mod state;

pub use client::{CacheSettings, QueryClient};
pub use handle::Query;
pub use state::{QueryStatus, RemoteQuery};
