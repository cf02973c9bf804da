//! Request URL construction
//!
//! Listing and search URLs get their parameters through standard
//! `application/x-www-form-urlencoded` query encoding. Detail, images and
//! CDN URLs are plain concatenations onto the configured bases.

use reqwest::Url;

use super::models::MovieId;
use crate::config::{AppConfig, ConfigError};

/// Base URLs of the catalog API and the image CDN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    list: Url,
    search: Url,
    detail: String,
    image: String,
}

impl Endpoints {
    /// Build endpoints from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the list or search base cannot be parsed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            list: parse_base("movie_list_url", &config.movie_list_url)?,
            search: parse_base("movie_search_url", &config.movie_search_url)?,
            detail: config.movie_detail_url.clone(),
            image: config.image_url.clone(),
        })
    }

    /// Popular listing: `{list}?page=N`
    #[must_use]
    pub fn popular(&self, page: u32) -> String {
        let mut url = self.list.clone();
        url.query_pairs_mut().append_pair("page", &page.to_string());
        url.into()
    }

    /// Title search: `{search}?page=N&query=TERM`
    #[must_use]
    pub fn search(&self, term: &str, page: u32) -> String {
        let mut url = self.search.clone();
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("query", term);
        url.into()
    }

    /// Listing URL for a committed term: popular when empty, search otherwise
    #[must_use]
    pub fn listing(&self, committed_term: &str, page: u32) -> String {
        if committed_term.is_empty() {
            self.popular(page)
        } else {
            self.search(committed_term, page)
        }
    }

    /// Movie record: `{detail}{id}`
    #[must_use]
    pub fn movie(&self, id: MovieId) -> String {
        format!("{}{id}", self.detail)
    }

    /// Movie images: `{detail}{id}/images`
    #[must_use]
    pub fn movie_images(&self, id: MovieId) -> String {
        format!("{}{id}/images", self.detail)
    }

    /// Renderable CDN URL for a relative image path
    #[must_use]
    pub fn image(&self, path: &str) -> String {
        format!("{}{path}", self.image)
    }
}

fn parse_base(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        field,
        reason: e.to_string(),
    })
}
