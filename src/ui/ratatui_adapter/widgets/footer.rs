//! Page footer with the contact address

use crate::about::{FOOTER_TAGLINE, FOOTER_TITLE};
use crate::contact::CONTACT_EMAIL;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Footer: title, tagline and either the address or the copy confirmation
pub struct Footer<'a> {
    theme: &'a Theme,
    /// Replaces the address while set
    copied: Option<&'a str>,
}

impl<'a> Footer<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            copied: None,
        }
    }

    #[must_use]
    pub const fn copied(mut self, text: Option<&'a str>) -> Self {
        self.copied = text;
        self
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let contact = match self.copied {
            Some(text) => Span::styled(text, self.theme.success_style()),
            None => Span::raw(format!("Kontakt: {CONTACT_EMAIL} (Ctrl+Y kopierar)")),
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(FOOTER_TITLE, self.theme.heading_style()),
                Span::styled(" · ", self.theme.dimmed_style()),
                Span::styled(FOOTER_TAGLINE, self.theme.dimmed_style()),
            ]),
            Line::from(contact),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
