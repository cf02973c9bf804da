//! Movie catalog API access
//!
//! - [`fetcher`]: authenticated GET + JSON decoding behind the `Fetcher` trait
//! - [`endpoints`]: URL construction for listing, search, detail and images
//! - [`models`]: response shapes
//! - [`error`]: the single runtime failure kind, `RequestFailed`

pub mod endpoints;
pub mod error;
pub mod fetcher;
pub mod models;

pub use endpoints::Endpoints;
pub use error::ApiError;
pub use fetcher::{Fetcher, HttpFetcher};
pub use models::{ImageEntry, ImageSet, MovieDetail, MovieId, MoviePage, MovieSummary};
