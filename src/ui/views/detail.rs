//! Detail page for a single movie

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::{Outcome, ViewContext, ViewState};
use crate::api::{Endpoints, ImageSet, MovieDetail, MovieId};
use crate::query::Query;
use crate::sheet::{DetailSheet, Row};
use crate::ui::events::DetailAction;
use crate::ui::theme::Theme;
use crate::ui::widgets::{Button, ErrorPanel, Footer, HelpBar, KeyHint, Loading};

const HINTS: [KeyHint; 4] = [
    KeyHint::new("Esc", "back"),
    KeyHint::new("j/k", "scroll"),
    KeyHint::new("o", "homepage"),
    KeyHint::new("q", "quit"),
];

const PAGE_STEP: u16 = 10;

/// Detail page keyed by movie id
///
/// The record and its images are fetched independently. Only the record
/// decides Loading, Error or Ready; a failed image request leaves the
/// images section empty.
pub struct DetailView {
    id: MovieId,
    movie: Query<MovieDetail>,
    images: Query<ImageSet>,
    endpoints: Endpoints,
    scroll: u16,
}

impl DetailView {
    /// Mount the view and start both requests
    #[must_use]
    pub fn mount<C>(id: MovieId, ctx: &ViewContext<C>) -> Self {
        let mut movie = Query::new(ctx.client.clone());
        movie.set_key(ctx.endpoints.movie(id));
        let mut images = Query::new(ctx.client.clone());
        images.set_key(ctx.endpoints.movie_images(id));

        tracing::debug!(id, "detail view mounted");

        Self {
            id,
            movie,
            images,
            endpoints: ctx.endpoints.clone(),
            scroll: 0,
        }
    }

    #[must_use]
    pub const fn id(&self) -> MovieId {
        self.id
    }

    /// Apply whatever results have arrived
    pub fn sync(&mut self) -> bool {
        let movie = self.movie.poll();
        let images = self.images.poll();
        movie || images
    }

    /// Block until both requests resolve or `timeout` elapses
    ///
    /// Returns `true` once the movie record has resolved.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let settled = self.movie.wait(timeout);
        self.images.wait(timeout);
        settled
    }

    #[must_use]
    pub fn state(&self) -> ViewState<'_, MovieDetail> {
        self.movie.state().into()
    }

    /// Formatted page content, once the record is ready
    #[must_use]
    pub fn sheet(&self) -> Option<DetailSheet> {
        self.movie
            .state()
            .value()
            .map(|detail| DetailSheet::build(detail, self.images.state().value(), &self.endpoints))
    }

    #[must_use]
    pub const fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Apply a key action
    pub fn handle(&mut self, action: DetailAction) -> Outcome {
        match action {
            DetailAction::Back => return Outcome::Home,
            DetailAction::Quit => return Outcome::Quit,
            DetailAction::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            DetailAction::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            DetailAction::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_STEP),
            DetailAction::PageDown => self.scroll = self.scroll.saturating_add(PAGE_STEP),
            DetailAction::OpenHomepage => self.open_homepage(),
        }
        Outcome::Stay
    }

    fn open_homepage(&self) {
        let Some(url) = self.sheet().and_then(|sheet| sheet.homepage) else {
            return;
        };
        match open::that_detached(&url) {
            Ok(()) => tracing::info!(url = %url, "opened homepage"),
            Err(e) => tracing::warn!(url = %url, error = %e, "failed to open homepage"),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let [body, back, footer, help] = Layout::vertical([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        match self.state() {
            ViewState::Loading => Loading::new(theme).render(body, buf),
            ViewState::Error => ErrorPanel::new(theme).render(body, buf),
            ViewState::Ready(_) => {
                if let Some(sheet) = self.sheet() {
                    self.render_sheet(&sheet, body, buf, theme);
                }
            }
        }

        let [_, button, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(30),
            Constraint::Fill(1),
        ])
        .areas(back);
        Button::new("Back To Home Page", theme)
            .key_hint("Esc")
            .render(button, buf);

        Footer::new(theme).render(footer, buf);
        HelpBar::new(&HINTS, theme).render(help, buf);
    }

    fn render_sheet(&self, sheet: &DetailSheet, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let lines = sheet_lines(sheet, theme);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(format!(" {} ", sheet.title));
        let inner = block.inner(area);

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });

        // Rows after wrapping; the last screenful stays visible
        let rows = paragraph.line_count(inner.width);
        let max_scroll = u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_sub(inner.height);
        let scroll = self.scroll.min(max_scroll);

        paragraph
            .block(block)
            .scroll((scroll, 0))
            .render(area, buf);
    }
}

fn section<'a>(lines: &mut Vec<Line<'a>>, heading: &'a str, theme: &Theme) {
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(heading, theme.title_style())));
}

fn rows<'a>(lines: &mut Vec<Line<'a>>, rows: &'a [Row], theme: &Theme) {
    lines.extend(rows.iter().map(|row| {
        Line::from(vec![
            Span::styled(format!("{}: ", row.label), theme.label_style()),
            Span::raw(row.value.as_str()),
        ])
    }));
}

fn sheet_lines<'a>(sheet: &'a DetailSheet, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(sheet.title.as_str(), theme.title_style())),
        Line::from(Span::styled(sheet.genres.as_str(), theme.dimmed_style())),
    ];

    for (label, url) in [("Poster", &sheet.poster_url), ("Backdrop", &sheet.backdrop_url)] {
        if let Some(url) = url {
            lines.push(Line::from(vec![
                Span::styled(format!("{label}: "), theme.label_style()),
                Span::styled(url.as_str(), theme.link_style()),
            ]));
        }
    }

    section(&mut lines, "Details", theme);
    rows(&mut lines, &sheet.facts, theme);

    section(&mut lines, "Overview", theme);
    lines.push(Line::from(sheet.overview.as_str()));

    section(&mut lines, "Production Information", theme);
    rows(&mut lines, &sheet.production, theme);

    section(&mut lines, "Additional Information", theme);
    rows(&mut lines, &sheet.additional, theme);

    section(&mut lines, "Images", theme);
    if sheet.images.is_empty() {
        lines.push(Line::from(Span::styled("-", theme.dimmed_style())));
    }
    lines.extend(
        sheet
            .images
            .iter()
            .map(|url| Line::from(Span::styled(url.as_str(), theme.link_style()))),
    );

    lines
}
