//! About page widget

use crate::about::{Block as AboutBlock, SECTIONS};
use crate::contact::CONTACT_EMAIL;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Scrollable about page
pub struct AboutView<'a> {
    theme: &'a Theme,
    scroll: u16,
}

impl<'a> AboutView<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme, scroll: 0 }
    }

    #[must_use]
    pub const fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Number of unwrapped lines, the upper bound for scrolling
    #[must_use]
    pub fn line_count() -> usize {
        AboutView::new(&Theme::default()).content().len()
    }

    fn content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for section in SECTIONS {
            lines.push(Line::styled(
                section.heading,
                self.theme.heading_style().add_modifier(Modifier::UNDERLINED),
            ));
            lines.push(Line::default());

            for block in section.blocks {
                match block {
                    AboutBlock::Paragraph(text) => lines.push(Line::raw(*text)),
                    AboutBlock::Emphasis(lead, rest) => lines.push(Line::from(vec![
                        Span::styled(*lead, self.theme.heading_style()),
                        Span::raw(" "),
                        Span::raw(*rest),
                    ])),
                    AboutBlock::Bullets(items) => {
                        lines.extend(items.iter().map(|item| Line::raw(format!("  • {item}"))));
                    }
                    AboutBlock::Status(status, text) => lines.push(Line::from(vec![
                        Span::styled(format!("{}: ", status.label()), self.theme.status_style(*status)),
                        Span::raw(*text),
                    ])),
                    AboutBlock::Contact(text) => lines.push(Line::from(vec![
                        Span::raw(*text),
                        Span::raw(" "),
                        Span::styled(CONTACT_EMAIL, self.theme.info_style()),
                        Span::raw("."),
                    ])),
                }
                lines.push(Line::default());
            }
        }
        lines
    }
}

impl Widget for AboutView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Om ");

        Paragraph::new(self.content())
            .block(block)
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
