//! Search command - print one page of listings

use super::{Result, Services};
use crate::api::MoviePage;
use crate::output;
use crate::search::MAX_PAGES;

/// Fetch the listing for `term` (popular when `None`) at `page`
///
/// # Errors
/// Returns an error if the request fails or the body is not a listing.
pub fn fetch_page(services: &Services, term: Option<&str>, page: u32) -> Result<MoviePage> {
    let url = services.endpoints.listing(term.unwrap_or_default(), page);
    tracing::debug!(%url, "search command");
    Ok(services.client.fetch_as::<MoviePage>(&url)?)
}

/// Lines printed for a listing
#[must_use]
pub fn listing_lines(listing: &MoviePage, quiet: bool) -> Vec<String> {
    let mut lines: Vec<String> = listing
        .results
        .iter()
        .map(|movie| output::movie_line(movie, quiet))
        .collect();

    if !quiet {
        if listing.results.is_empty() {
            lines.push("No movies found".to_string());
        }
        lines.push(String::new());
        lines.push(output::page_summary(listing, MAX_PAGES));
    }
    lines
}

/// Execute the search command
///
/// # Errors
/// Returns an error if the listing cannot be fetched.
pub fn execute(services: &Services, term: Option<&str>, page: u32, quiet: bool) -> Result<()> {
    let listing = fetch_page(services, term, page)?;
    for line in listing_lines(&listing, quiet) {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ScriptedFetcher, movie_page_json, test_config, test_endpoints};
    use std::sync::Arc;

    fn services(fetcher: ScriptedFetcher) -> Services {
        Services::with_fetcher(&test_config(), Arc::new(fetcher)).unwrap()
    }

    #[test]
    fn test_no_term_lists_popular() {
        let e = test_endpoints();
        let s = services(ScriptedFetcher::new().respond(e.popular(2), movie_page_json(2, 9, 2)));

        let listing = fetch_page(&s, None, 2).unwrap();
        assert_eq!(listing.page, 2);
        assert_eq!(listing.results.len(), 2);
    }

    #[test]
    fn test_term_uses_search_endpoint() {
        let e = test_endpoints();
        let s = services(ScriptedFetcher::new().respond(e.search("alien", 1), movie_page_json(1, 1, 1)));

        let listing = fetch_page(&s, Some("alien"), 1).unwrap();
        assert_eq!(listing_lines(&listing, true), vec!["101\tMovie 1-1".to_string()]);
    }

    #[test]
    fn test_failure_is_an_error() {
        let s = services(ScriptedFetcher::new());
        assert!(matches!(
            fetch_page(&s, Some("x"), 1),
            Err(crate::ElbiError::Api(_))
        ));
    }

    #[test]
    fn test_empty_listing_says_so() {
        let listing = MoviePage {
            page: 1,
            total_pages: 1,
            ..MoviePage::default()
        };
        let lines = listing_lines(&listing, false);
        assert_eq!(lines[0], "No movies found");
        assert_eq!(lines.last().map(String::as_str), Some("Page 1 of 1 (0 results)"));
    }
}
