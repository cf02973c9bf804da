//! Authenticated JSON fetching
//!
//! `Fetcher` is the seam between the query cache and the network so tests
//! can substitute a scripted implementation.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

use super::error::{ApiError, Result};

/// Issues read-only GET requests and returns the decoded JSON body
///
/// Implementations must not retry: a failure is reported once and the
/// caller decides what to do with it.
pub trait Fetcher: Send + Sync {
    /// Fetch `url` and decode the body as JSON
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RequestFailed` on network failure, non-2xx status
    /// or an undecodable body.
    fn get_json(&self, url: &str) -> Result<Value>;
}

/// `Fetcher` backed by a blocking reqwest client
///
/// Every request carries `Accept: application/json` and a bearer token.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client that authenticates with `api_key`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ClientSetup` if the key is not a valid header value
    /// or the client cannot be constructed.
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| ApiError::ClientSetup(format!("invalid API key: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .user_agent(concat!("elbi/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::ClientSetup(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn get_json(&self, url: &str) -> Result<Value> {
        tracing::debug!(%url, "GET");

        let outcome = self
            .client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::json::<Value>);

        outcome.map_err(|e| {
            tracing::warn!(%url, error = %e, "request failed");
            ApiError::request_failed(url, e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_fetcher_builds() {
        assert!(HttpFetcher::new("token", Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn test_http_fetcher_rejects_invalid_key() {
        let result = HttpFetcher::new("bad\nkey", Duration::from_secs(5));
        assert!(matches!(result, Err(ApiError::ClientSetup(_))));
    }

    #[test]
    fn test_unreachable_host_is_request_failed() {
        let fetcher = HttpFetcher::new("token", Duration::from_millis(500)).unwrap();
        // Port 9 on loopback: nothing listens there, so the connect is refused
        let result = fetcher.get_json("http://127.0.0.1:9/3/movie/27205");
        assert!(matches!(result, Err(ApiError::RequestFailed { .. })));
    }
}
