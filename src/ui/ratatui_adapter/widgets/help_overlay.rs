//! Help overlay widget for displaying the full keybind reference

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn heading(&self, text: &'static str) -> Line<'static> {
        Line::styled(text, self.theme.cursor_style().add_modifier(Modifier::UNDERLINED))
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            self.heading("  Sök"),
            Line::default(),
            self.help_line("  Skriv", "Filtrera på namn, kategori, status"),
            self.help_line("  Enter", "Lägg till som tagg"),
            self.help_line("  Backspace", "Radera tecken / sista taggen"),
            self.help_line("  Ctrl+X", "Ta bort sista taggen"),
            self.help_line("  Esc", "Rensa text, sedan taggar, sedan avsluta"),
            Line::default(),
            self.heading("  Tabell"),
            Line::default(),
            self.help_line("  ↑/↓", "Flytta markören"),
            self.help_line("  PgUp/PgDn", "Bläddra en sida"),
            self.help_line("  Home/End", "Första/sista raden"),
            self.help_line("  Enter", "Visa/dölj detaljer (tom sökruta)"),
            self.help_line("  F2/F3/F4", "Sortera på varumärke/kategori/status"),
            self.help_line("  Klick", "Sortera på rubrik, öppna rad"),
            Line::default(),
            self.heading("  Övrigt"),
            Line::default(),
            self.help_line("  Tab", "Växla mellan Hem och Om"),
            self.help_line("  Ctrl+Y", "Kopiera kontaktadressen"),
            self.help_line("  Ctrl+C", "Avsluta"),
            Line::default(),
            Line::styled("  Tryck valfri tangent för att stänga", self.theme.dimmed_style()),
            Line::default(),
        ]
    }

    /// Create a help line with key and description
    fn help_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{key:<14}"), self.theme.info_style()),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(70, 80, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Hjälp ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content()).block(block).render(popup_area, buf);
    }
}
