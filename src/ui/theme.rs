//! Color theme definitions for the TUI
//!
//! Defines colors and styles used throughout the application.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent for headings and focused borders
    pub accent: Color,
    /// Background of the selected card
    pub selection_bg: Color,
    /// Foreground of the selected card
    pub selection_fg: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for URLs
    pub link: Color,
    /// Color for section labels
    pub label: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            accent: Color::Cyan,
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            error: Color::Red,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            link: Color::Blue,
            label: Color::Yellow,
        }
    }

    /// Style for the big page title
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the currently selected card
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    #[must_use]
    pub fn bold_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Style for focused borders
    #[must_use]
    pub fn focus_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    #[must_use]
    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Style for table labels and section headings
    #[must_use]
    pub fn label_style(&self) -> Style {
        Style::default().fg(self.label)
    }

    /// Style for enabled buttons
    #[must_use]
    pub fn button_style(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for disabled buttons
    #[must_use]
    pub fn disabled_style(&self) -> Style {
        Style::default()
            .fg(self.dimmed)
            .add_modifier(Modifier::DIM)
    }
}
