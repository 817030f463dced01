//! Search bar widget: committed tags as chips followed by the live input

use crate::search::TagQuery;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Hint shown while the search box is empty
pub const PLACEHOLDER: &str = "Sök varumärke, kategori eller Ja/Delvis/Nej och tryck Enter";

/// Search bar widget that displays tag chips and the query with cursor
pub struct SearchBar<'a> {
    query: &'a TagQuery,
    theme: &'a Theme,
    /// Whether the widget has focus
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a TagQuery, theme: &'a Theme) -> Self {
        Self {
            query,
            theme,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn spans(&self) -> Vec<Span<'a>> {
        let mut spans = Vec::new();

        for tag in self.query.tags() {
            spans.push(Span::styled(format!("[{tag} ×]"), self.theme.tag_style()));
            spans.push(Span::raw(" "));
        }

        let input = self.query.current_input();
        spans.push(Span::raw(input));
        if self.focused {
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        if input.is_empty() && self.query.tags().is_empty() {
            spans.push(Span::styled(PLACEHOLDER, self.theme.dimmed_style()));
        }
        spans
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Sök ");

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(self.spans())).render(inner, buf);
    }
}
