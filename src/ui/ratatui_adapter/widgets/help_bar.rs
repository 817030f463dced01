//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::state::View;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// Key combination (e.g., "Enter", "F2")
    pub key: String,
    /// Action description
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for a view
    #[must_use]
    pub fn hints_for(view: View) -> Vec<KeyHint> {
        match view {
            View::Home => vec![
                KeyHint::new("Enter", "tagg/visa"),
                KeyHint::new("Esc", "rensa"),
                KeyHint::new("F2-F4", "sortera"),
                KeyHint::new("Tab", "om"),
                KeyHint::new("Ctrl+Y", "kopiera e-post"),
                KeyHint::new("F1", "hjälp"),
            ],
            View::About => vec![
                KeyHint::new("↑/↓", "scrolla"),
                KeyHint::new("Tab", "hem"),
                KeyHint::new("Ctrl+Y", "kopiera e-post"),
                KeyHint::new("F1", "hjälp"),
            ],
        }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
