//! Button widget with an enabled/disabled look

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// A labelled button showing its key binding
pub struct Button<'a> {
    label: &'a str,
    key_hint: Option<&'a str>,
    disabled: bool,
    theme: &'a Theme,
}

impl<'a> Button<'a> {
    #[must_use]
    pub const fn new(label: &'a str, theme: &'a Theme) -> Self {
        Self {
            label,
            key_hint: None,
            disabled: false,
            theme,
        }
    }

    /// Show the key that activates the button
    #[must_use]
    pub const fn key_hint(mut self, hint: &'a str) -> Self {
        self.key_hint = Some(hint);
        self
    }

    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (style, border) = if self.disabled {
            (self.theme.disabled_style(), self.theme.border_style())
        } else {
            (self.theme.button_style(), self.theme.focus_style())
        };

        let block = Block::default().borders(Borders::ALL).border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled(format!(" {} ", self.label), style)];
        if let Some(hint) = self.key_hint {
            spans.push(Span::styled(format!(" {hint}"), self.theme.dimmed_style()));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
