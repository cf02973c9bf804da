//! Loading indicator

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Loading<'a> {
    theme: &'a Theme,
}

impl<'a> Loading<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Loading<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Vertically center a single line
        let y = area.y + area.height / 2;
        let line_area = Rect::new(area.x, y, area.width, area.height.min(1));

        Paragraph::new(Line::from(Span::styled("Loading...", self.theme.dimmed_style())))
            .alignment(Alignment::Center)
            .render(line_area, buf);
    }
}
