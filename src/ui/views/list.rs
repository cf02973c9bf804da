//! Search and results page

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{Outcome, SharedStore, ViewContext, ViewState};
use crate::api::{Endpoints, MoviePage, MovieSummary};
use crate::query::Query;
use crate::search::SearchController;
use crate::timer::Clock;
use crate::ui::events::ListAction;
use crate::ui::theme::Theme;
use crate::ui::widgets::{
    Button, ErrorPanel, Footer, GRID_COLUMNS, HelpBar, KeyHint, Loading, MovieGrid, SearchBar,
};

const HINTS: [KeyHint; 5] = [
    KeyHint::new("type", "search"),
    KeyHint::new("arrows", "move"),
    KeyHint::new("Enter", "open"),
    KeyHint::new("PgUp/PgDn", "page"),
    KeyHint::new("Esc", "quit"),
];

/// List page: search input, result grid and pagination
pub struct ListView<C> {
    controller: SearchController<SharedStore, C>,
    query: Query<MoviePage>,
    endpoints: Endpoints,
    selected: usize,
}

impl<C: Clock + Clone> ListView<C> {
    /// Mount the view, restoring search state from the shared store
    #[must_use]
    pub fn mount(ctx: &ViewContext<C>) -> Self {
        let mut view = Self {
            controller: SearchController::new(ctx.store.clone(), ctx.clock.clone(), ctx.debounce),
            query: Query::new(ctx.client.clone()),
            endpoints: ctx.endpoints.clone(),
            selected: 0,
        };
        view.sync();
        view
    }
}

impl<C: Clock> ListView<C> {
    /// Advance the debounce timer, follow the derived key and apply results
    ///
    /// Returns `true` when something visible changed.
    pub fn sync(&mut self) -> bool {
        let committed = self.controller.tick();

        let key_changed = self
            .query
            .set_key(self.controller.request_url(&self.endpoints));
        if key_changed {
            self.selected = 0;
        }

        let resolved = self.query.poll();
        self.controller.observe(self.query.state());

        committed || key_changed || resolved
    }

    /// Block until the current listing resolves or `timeout` elapses
    pub fn settle(&mut self, timeout: Duration) -> bool {
        self.sync();
        let settled = self.query.wait(timeout);
        self.controller.observe(self.query.state());
        settled
    }

    /// Apply a key action
    pub fn handle(&mut self, action: ListAction) -> Outcome {
        let status = self.query.state().status();

        match action {
            ListAction::Insert(c) => {
                let mut text = self.controller.input().to_string();
                text.push(c);
                self.controller.set_input(text);
            }
            ListAction::Backspace => {
                let mut text = self.controller.input().to_string();
                if text.pop().is_some() {
                    self.controller.set_input(text);
                }
            }
            ListAction::ClearInput => {
                if !self.controller.input().is_empty() {
                    self.controller.set_input(String::new());
                }
            }
            ListAction::NextPage => {
                self.controller.next_page(status);
            }
            ListAction::PrevPage => {
                self.controller.prev_page(status);
            }
            ListAction::CursorLeft => self.selected = self.selected.saturating_sub(1),
            ListAction::CursorRight => self.move_to(self.selected + 1),
            ListAction::CursorUp => self.selected = self.selected.saturating_sub(GRID_COLUMNS),
            ListAction::CursorDown => self.move_to(self.selected + GRID_COLUMNS),
            ListAction::Open => {
                if let Some(movie) = self.selected_movie() {
                    tracing::debug!(id = movie.id, title = %movie.title, "opening movie");
                    return Outcome::Open(movie.id);
                }
            }
            ListAction::Quit => return Outcome::Quit,
        }

        Outcome::Stay
    }

    fn move_to(&mut self, index: usize) {
        if index < self.results().len() {
            self.selected = index;
        }
    }

    fn results(&self) -> &[MovieSummary] {
        self.query
            .state()
            .value()
            .map(|page| page.results.as_slice())
            .unwrap_or_default()
    }

    /// Movie under the cursor, if results are showing
    #[must_use]
    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.results().get(self.selected)
    }

    #[must_use]
    pub fn state(&self) -> ViewState<'_, MoviePage> {
        self.query.state().into()
    }

    #[must_use]
    pub const fn controller(&self) -> &SearchController<SharedStore, C> {
        &self.controller
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let [header, search, hint, body, pager, footer, help] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled("Elbi Movies", theme.title_style())),
            Line::from(vec![
                Span::raw("Search any movie for "),
                Span::styled("free", theme.bold_style().add_modifier(Modifier::UNDERLINED)),
            ]),
        ])
        .render(header, buf);

        SearchBar::new(self.controller.input(), "Search Any Movies", theme)
            .pending(self.controller.is_debouncing())
            .render(search, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Search by titles like: ", theme.dimmed_style()),
            Span::styled("Fast And Furious, Dragon Ball, One Piece", theme.bold_style()),
        ]))
        .render(hint, buf);

        match self.state() {
            ViewState::Loading => Loading::new(theme).render(body, buf),
            ViewState::Error => ErrorPanel::new(theme).render(body, buf),
            ViewState::Ready(page) => {
                MovieGrid::new(&page.results, self.selected, &self.endpoints, theme)
                    .render(body, buf);
            }
        }

        self.render_pager(pager, buf, theme);
        Footer::new(theme).render(footer, buf);
        HelpBar::new(&HINTS, theme).render(help, buf);
    }

    fn render_pager(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let status = self.query.state().status();
        let [prev, label, next] = Layout::horizontal([
            Constraint::Percentage(30),
            Constraint::Min(10),
            Constraint::Percentage(30),
        ])
        .areas(area);

        Button::new("Previous", theme)
            .key_hint("PgUp")
            .disabled(!self.controller.can_prev(status))
            .render(prev, buf);

        let page = self.controller.page();
        let text = match self.controller.page_limit() {
            Some(limit) => format!("Page {page} of {limit}"),
            None => format!("Page {page}"),
        };
        // Middle row, level with the button labels
        let label_row = Rect::new(label.x, label.y + label.height / 2, label.width, label.height.min(1));
        Paragraph::new(Line::from(Span::styled(text, theme.dimmed_style())))
            .alignment(Alignment::Center)
            .render(label_row, buf);

        Button::new("Next", theme)
            .key_hint("PgDn")
            .disabled(!self.controller.can_next(status))
            .render(next, buf);
    }
}
