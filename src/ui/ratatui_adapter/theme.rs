//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the browser.

use crate::catalog::ManufacturingStatus;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the row under the cursor
    pub selection_bg: Color,
    /// Foreground color for the row under the cursor
    pub selection_fg: Color,
    /// Color for the cursor indicator and focused borders
    pub cursor: Color,
    /// Status colors
    pub status_yes: Color,
    pub status_partial: Color,
    pub status_no: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for search tag chips
    pub tag: Color,
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
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            status_yes: Color::Green,
            status_partial: Color::Yellow,
            status_no: Color::Red,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            tag: Color::Magenta,
        }
    }

    /// Style for the row under the cursor
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

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.cursor).add_modifier(Modifier::BOLD)
    }

    /// Style for table headers and section headings
    #[must_use]
    pub fn heading_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Badge color for a manufacturing status
    #[must_use]
    pub fn status_style(&self, status: ManufacturingStatus) -> Style {
        let color = match status {
            ManufacturingStatus::Yes => self.status_yes,
            ManufacturingStatus::Partial => self.status_partial,
            ManufacturingStatus::No => self.status_no,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Style for the primary brand in a hierarchy
    #[must_use]
    pub fn primary_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for search tag chips
    #[must_use]
    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag).add_modifier(Modifier::BOLD)
    }
}
