//! Static failure banner
//!
//! Shows no diagnostic detail; the cause is logged by the fetch layer.

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ErrorPanel<'a> {
    theme: &'a Theme,
}

impl<'a> ErrorPanel<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for ErrorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.error_style());

        let lines = vec![
            Line::from(Span::styled("Sorry", self.theme.error_style().patch(self.theme.bold_style()))),
            Line::from("An error occurred in the application"),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
