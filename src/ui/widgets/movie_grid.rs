//! Grid of result cards for the list view

use crate::api::{Endpoints, MovieSummary};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Cards per grid row; cursor up/down moves by this many cards
pub const GRID_COLUMNS: usize = 3;

/// Border plus title, release date and poster lines
const CARD_HEIGHT: u16 = 5;

/// Grid widget that keeps the selected card scrolled into view
pub struct MovieGrid<'a> {
    movies: &'a [MovieSummary],
    selected: usize,
    endpoints: &'a Endpoints,
    theme: &'a Theme,
}

impl<'a> MovieGrid<'a> {
    #[must_use]
    pub const fn new(
        movies: &'a [MovieSummary],
        selected: usize,
        endpoints: &'a Endpoints,
        theme: &'a Theme,
    ) -> Self {
        Self {
            movies,
            selected,
            endpoints,
            theme,
        }
    }

    fn render_card(&self, movie: &MovieSummary, is_selected: bool, area: Rect, buf: &mut Buffer) {
        let border = if is_selected {
            self.theme.focus_style()
        } else {
            self.theme.border_style()
        };
        let title_style = if is_selected {
            self.theme.selected_style()
        } else {
            self.theme.bold_style()
        };

        let release = movie
            .release_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("-");
        let poster = movie
            .poster_path
            .as_deref()
            .map_or_else(|| "no poster".to_string(), |p| self.endpoints.image(p));

        let lines = vec![
            Line::from(Span::styled(movie.title.as_str(), title_style)),
            Line::from(Span::styled(release, self.theme.dimmed_style())),
            Line::from(Span::styled(poster, self.theme.link_style())),
        ];

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).border_style(border))
            .render(area, buf);
    }
}

impl Widget for MovieGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.movies.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No movies found",
                self.theme.dimmed_style(),
            )))
            .alignment(Alignment::Center)
            .render(area, buf);
            return;
        }

        let total_rows = self.movies.len().div_ceil(GRID_COLUMNS);
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
        let selected_row = self.selected / GRID_COLUMNS;
        let first_row = selected_row.saturating_sub(visible_rows - 1);
        let last_row = total_rows.min(first_row + visible_rows);

        #[allow(clippy::cast_possible_truncation)]
        let columns = Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS]);

        for (offset, row) in (first_row..last_row).enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let y = area.y + offset as u16 * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }

            let cells = columns.split(Rect::new(area.x, y, area.width, height));
            for (col, cell) in cells.iter().enumerate() {
                let index = row * GRID_COLUMNS + col;
                if let Some(movie) = self.movies.get(index) {
                    self.render_card(movie, index == self.selected, *cell, buf);
                }
            }
        }
    }
}
