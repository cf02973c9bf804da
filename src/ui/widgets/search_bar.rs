//! Search bar widget for query input

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the typed text with a cursor at the end
pub struct SearchBar<'a> {
    /// Current input text
    input: &'a str,
    /// Shown when the input is empty
    placeholder: &'a str,
    /// Theme for styling
    theme: &'a Theme,
    /// Typed text has not been committed yet
    pending: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(input: &'a str, placeholder: &'a str, theme: &'a Theme) -> Self {
        Self {
            input,
            placeholder,
            theme,
            pending: false,
        }
    }

    /// Mark the input as waiting to be committed
    #[must_use]
    pub const fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.pending { " Search (typing...) " } else { " Search " };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focus_style())
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let cursor = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let spans = if self.input.is_empty() {
            vec![cursor, Span::styled(self.placeholder, self.theme.dimmed_style())]
        } else {
            vec![Span::raw(self.input), cursor]
        };

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
