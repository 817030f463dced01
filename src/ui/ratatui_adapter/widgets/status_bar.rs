//! Status bar widget for displaying messages

use crate::ui::ratatui_adapter::state::{MessageLevel, StatusMessage};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Status bar widget: the latest message, or the row count when idle
pub struct StatusBar<'a> {
    /// Messages to display
    messages: &'a [&'a StatusMessage],
    theme: &'a Theme,
    shown: usize,
    total: usize,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(messages: &'a [&'a StatusMessage], theme: &'a Theme) -> Self {
        Self {
            messages,
            theme,
            shown: 0,
            total: 0,
        }
    }

    /// Set the row counts shown when there is no message
    #[must_use]
    pub const fn with_counts(mut self, shown: usize, total: usize) -> Self {
        self.shown = shown;
        self.total = total;
        self
    }

    /// Get style for a message level
    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.messages.last() {
            Some(message) => {
                let style = self.style_for_level(message.level);
                Line::from(vec![
                    Span::styled(Self::prefix_for_level(message.level), style),
                    Span::styled(message.text.as_str(), style),
                ])
            }
            None => Line::styled(
                format!("{} av {} varumärken", self.shown, self.total),
                self.theme.dimmed_style(),
            ),
        };

        Paragraph::new(line).render(area, buf);
    }
}
