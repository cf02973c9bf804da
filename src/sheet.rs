//! Presentation model of a movie's detail page
//!
//! Turns a `MovieDetail` (and optionally its `ImageSet`) into labelled
//! display strings, applying the placeholder policy for absent fields:
//! text falls back to `-`, runtime and money fall back to `0`. Both the TUI
//! detail view and `elbi show` render from this model.

use crate::api::{Endpoints, ImageSet, MovieDetail};
use crate::format::{format_date, format_money};

/// A labelled value row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: &'static str,
    pub value: String,
}

impl Row {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Everything the detail page displays, already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSheet {
    pub title: String,
    pub genres: String,
    pub backdrop_url: Option<String>,
    pub poster_url: Option<String>,
    pub facts: Vec<Row>,
    pub overview: String,
    pub production: Vec<Row>,
    pub additional: Vec<Row>,
    /// CDN URLs of language-neutral backdrops
    pub images: Vec<String>,
    pub homepage: Option<String>,
}

/// Treat `None` and blank strings alike
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn or_dash(value: Option<&str>) -> String {
    present(value).unwrap_or("-").to_string()
}

impl DetailSheet {
    /// Build the sheet; `images` is `None` when the image request failed or
    /// has not resolved, which leaves the images section empty
    #[must_use]
    pub fn build(detail: &MovieDetail, images: Option<&ImageSet>, endpoints: &Endpoints) -> Self {
        let release = present(detail.release_date.as_deref())
            .map_or_else(|| "-".to_string(), format_date);

        let facts = vec![
            Row::new("Release Date", release),
            Row::new("Native Language", or_dash(detail.original_language.as_deref())),
            Row::new("Duration", format!("{} Minutes", detail.runtime.unwrap_or(0))),
            Row::new("Status", or_dash(detail.status.as_deref())),
            Row::new("IMDB ID", or_dash(detail.imdb_id.as_deref())),
            Row::new("Tag Line", or_dash(detail.tagline.as_deref())),
        ];

        #[allow(clippy::cast_precision_loss)]
        let money = |amount: Option<u64>| format!("${}", format_money(amount.unwrap_or(0) as f64));
        let companies = detail.company_names();

        let production = vec![
            Row::new("Budget", money(detail.budget)),
            Row::new("Revenue", money(detail.revenue)),
            Row::new("Production Company", or_dash(Some(&companies))),
        ];

        let average = detail
            .vote_average
            .filter(|v| *v != 0.0)
            .map_or_else(|| "-".to_string(), |v| v.to_string());
        let count = detail
            .vote_count
            .filter(|c| *c != 0)
            .map_or_else(|| "-".to_string(), |c| c.to_string());

        let additional = vec![
            Row::new(
                "Rating",
                format!("{average} / 10 from a total of {count} assessments"),
            ),
            Row::new("Website Home Page", or_dash(detail.homepage.as_deref())),
        ];

        let image_urls = images
            .map(|set| {
                set.neutral_backdrops()
                    .map(|b| endpoints.image(&b.file_path))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            title: detail.title.clone(),
            genres: detail.genre_names(),
            backdrop_url: present(detail.backdrop_path.as_deref()).map(|p| endpoints.image(p)),
            poster_url: present(detail.poster_path.as_deref()).map(|p| endpoints.image(p)),
            facts,
            overview: or_dash(detail.overview.as_deref()),
            production,
            additional,
            images: image_urls,
            homepage: present(detail.homepage.as_deref()).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{inception_images_json, inception_json, test_endpoints};

    fn value<'a>(rows: &'a [Row], label: &str) -> &'a str {
        rows.iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
            .unwrap_or_else(|| panic!("missing row {label}"))
    }

    #[test]
    fn test_full_record() {
        let detail: MovieDetail = serde_json::from_value(inception_json()).unwrap();
        let images: ImageSet = serde_json::from_value(inception_images_json()).unwrap();
        let sheet = DetailSheet::build(&detail, Some(&images), &test_endpoints());

        assert_eq!(sheet.title, "Inception");
        assert_eq!(sheet.genres, "Action, Science Fiction");
        assert_eq!(value(&sheet.facts, "Release Date"), "Jul, 15 2010");
        assert_eq!(value(&sheet.facts, "Duration"), "148 Minutes");
        assert_eq!(value(&sheet.facts, "IMDB ID"), "tt1375666");
        assert_eq!(value(&sheet.production, "Budget"), "$160,000,000");
        assert_eq!(value(&sheet.production, "Revenue"), "$825,532,764");
        assert_eq!(
            value(&sheet.production, "Production Company"),
            "Legendary Pictures, Syncopy"
        );
        assert_eq!(
            value(&sheet.additional, "Rating"),
            "8.4 / 10 from a total of 35000 assessments"
        );
        assert_eq!(
            sheet.images,
            vec!["https://img.example.test/t/p/original/neutral-1.jpg".to_string()]
        );
        assert_eq!(
            sheet.poster_url.as_deref(),
            Some("https://img.example.test/t/p/original/inception-poster.jpg")
        );
    }

    #[test]
    fn test_sparse_record_uses_placeholders() {
        let detail = MovieDetail {
            id: 1,
            title: "Untitled".into(),
            homepage: Some(String::new()),
            ..MovieDetail::default()
        };
        let sheet = DetailSheet::build(&detail, None, &test_endpoints());

        assert_eq!(value(&sheet.facts, "Release Date"), "-");
        assert_eq!(value(&sheet.facts, "Native Language"), "-");
        assert_eq!(value(&sheet.facts, "Duration"), "0 Minutes");
        assert_eq!(value(&sheet.facts, "Tag Line"), "-");
        assert_eq!(sheet.overview, "-");
        assert_eq!(value(&sheet.production, "Budget"), "$0");
        assert_eq!(value(&sheet.production, "Production Company"), "-");
        assert_eq!(
            value(&sheet.additional, "Rating"),
            "- / 10 from a total of - assessments"
        );
        assert_eq!(value(&sheet.additional, "Website Home Page"), "-");
        assert!(sheet.homepage.is_none());
        assert!(sheet.images.is_empty());
        assert!(sheet.poster_url.is_none());
    }
}
