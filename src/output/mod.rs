//! Output formatting for CLI display
//!
//! Plain-text renderings of listings and detail sheets for the `search`
//! and `show` commands.

use colored::Colorize;

use crate::api::{MoviePage, MovieSummary};
use crate::sheet::{DetailSheet, Row};

/// Format one listing entry
///
/// Quiet mode prints `id<TAB>title` for scripting.
#[must_use]
pub fn movie_line(movie: &MovieSummary, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", movie.id, movie.title);
    }

    let release = movie
        .release_date
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or("-");
    format!(
        "  {:>8}  {} {}",
        movie.id.to_string().dimmed(),
        movie.title.bold(),
        format!("({release})").dimmed()
    )
}

/// Summary line printed under a listing
#[must_use]
pub fn page_summary(page: &MoviePage, limit: u32) -> String {
    format!(
        "Page {} of {} ({} results)",
        page.page,
        page.total_pages.min(limit),
        page.total_results
    )
}

fn heading(title: &str) -> String {
    format!("\n{}", title.cyan().bold())
}

fn row_line(row: &Row) -> String {
    format!("  {} {}", format!("{}:", row.label).yellow(), row.value)
}

/// Render a detail sheet as text
#[must_use]
pub fn sheet_text(sheet: &DetailSheet) -> String {
    let mut lines = vec![sheet.title.bold().to_string()];
    if !sheet.genres.is_empty() {
        lines.push(sheet.genres.dimmed().to_string());
    }
    if let Some(url) = &sheet.poster_url {
        lines.push(format!("Poster: {}", url.blue()));
    }
    if let Some(url) = &sheet.backdrop_url {
        lines.push(format!("Backdrop: {}", url.blue()));
    }

    lines.push(heading("Details"));
    lines.extend(sheet.facts.iter().map(row_line));

    lines.push(heading("Overview"));
    lines.push(format!("  {}", sheet.overview));

    lines.push(heading("Production Information"));
    lines.extend(sheet.production.iter().map(row_line));

    lines.push(heading("Additional Information"));
    lines.extend(sheet.additional.iter().map(row_line));

    lines.push(heading("Images"));
    if sheet.images.is_empty() {
        lines.push("  -".to_string());
    }
    lines.extend(sheet.images.iter().map(|url| format!("  {}", url.blue())));

    lines.join("\n")
}
