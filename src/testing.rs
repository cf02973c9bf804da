//! Testing utilities for elbi
//!
//! This module provides a scripted `Fetcher` that serves canned JSON bodies,
//! counts calls per URL and can simulate latency, plus small fixtures shared
//! by the unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use std::collections::HashMap;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use serde_json::{Value, json};

use crate::api::error::Result;
use crate::api::{ApiError, Endpoints, Fetcher};
use crate::config::AppConfig;

/// `Fetcher` that answers from a fixed table
///
/// URLs without a scripted response fail with `RequestFailed`, which makes
/// "simulated API failure" the default behavior.
#[derive(Default)]
pub struct ScriptedFetcher {
    responses: HashMap<String, Value>,
    latency: Duration,
    latency_for: HashMap<String, Duration>,
    calls: Mutex<HashMap<String, usize>>,
}

impl ScriptedFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`
    #[must_use]
    pub fn respond(mut self, url: impl Into<String>, body: Value) -> Self {
        self.responses.insert(url.into(), body);
        self
    }

    /// Delay every response by `latency`
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Delay responses for one URL by `latency`
    #[must_use]
    pub fn with_latency_for(mut self, url: impl Into<String>, latency: Duration) -> Self {
        self.latency_for.insert(url.into(), latency);
        self
    }

    /// Number of times `url` has been fetched
    #[must_use]
    pub fn calls(&self, url: &str) -> usize {
        self.calls
            .lock()
            .map(|calls| calls.get(url).copied().unwrap_or(0))
            .unwrap_or(0)
    }
}

impl Fetcher for ScriptedFetcher {
    fn get_json(&self, url: &str) -> Result<Value> {
        if let Ok(mut calls) = self.calls.lock() {
            *calls.entry(url.to_string()).or_default() += 1;
        }

        let latency = self.latency_for.get(url).copied().unwrap_or(self.latency);
        if !latency.is_zero() {
            thread::sleep(latency);
        }

        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| ApiError::request_failed(url, "HTTP 500 Internal Server Error"))
    }
}

/// Configuration pointing at a fake catalog host
#[must_use]
pub fn test_config() -> AppConfig {
    AppConfig {
        api_key: "test-token".into(),
        movie_list_url: "https://api.example.test/3/movie/popular".into(),
        movie_search_url: "https://api.example.test/3/search/movie".into(),
        movie_detail_url: "https://api.example.test/3/movie/".into(),
        image_url: "https://img.example.test/t/p/original".into(),
        ..AppConfig::default()
    }
}

/// Endpoints for [`test_config`]
///
/// # Panics
/// Panics if the fixed test URLs stop parsing.
#[must_use]
pub fn test_endpoints() -> Endpoints {
    Endpoints::from_config(&test_config()).expect("test endpoints are valid")
}

/// A listing body with `count` results and `total_pages` pages
#[must_use]
pub fn movie_page_json(page: u32, total_pages: u32, count: u64) -> Value {
    let results: Vec<Value> = (1..=count)
        .map(|i| {
            json!({
                "id": u64::from(page) * 100 + i,
                "title": format!("Movie {page}-{i}"),
                "poster_path": format!("/poster-{page}-{i}.jpg"),
                "release_date": "2010-07-15"
            })
        })
        .collect();

    json!({
        "page": page,
        "results": results,
        "total_pages": total_pages,
        "total_results": u64::from(total_pages) * 20
    })
}

/// A detail body modelled on a well-known title
#[must_use]
pub fn inception_json() -> Value {
    json!({
        "id": 27205,
        "title": "Inception",
        "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
        "release_date": "2010-07-15",
        "original_language": "en",
        "runtime": 148,
        "status": "Released",
        "imdb_id": "tt1375666",
        "tagline": "Your mind is the scene of the crime.",
        "overview": "Cobb, a skilled thief who commits corporate espionage by infiltrating the subconscious of his targets.",
        "budget": 160_000_000u64,
        "revenue": 825_532_764u64,
        "production_companies": [
            {"id": 923, "name": "Legendary Pictures"},
            {"id": 9996, "name": "Syncopy"}
        ],
        "vote_average": 8.4,
        "vote_count": 35000,
        "homepage": "https://www.warnerbros.com/movies/inception",
        "poster_path": "/inception-poster.jpg",
        "backdrop_path": "/inception-backdrop.jpg"
    })
}

/// An image body with one neutral and one English backdrop
#[must_use]
pub fn inception_images_json() -> Value {
    json!({
        "backdrops": [
            {"file_path": "/neutral-1.jpg", "iso_639_1": null},
            {"file_path": "/english-1.jpg", "iso_639_1": "en"}
        ]
    })
}

/// Flatten a rendered buffer into newline-separated rows of text
#[must_use]
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = usize::from(buffer.area.width.max(1));
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
