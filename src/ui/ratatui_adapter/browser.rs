//! Interactive brand browser
//!
//! Owns the terminal for the lifetime of one session: raw mode, the alternate
//! screen and mouse capture are switched on in [`Browser::run`] and always
//! restored before it returns.

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, Mode, View};
use super::theme::Theme;
use super::widgets::{AboutView, BrandTable, Footer, HelpBar, HelpOverlay, SearchBar, StatusBar};
use crate::about::{HEADER_TITLE, HERO_TITLE, hero_text};
use crate::contact::{self, Clipboard, SystemClipboard};
use crate::ui::error::{Result, UiError};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::io::{self, IsTerminal, Stdout};
use std::time::{Duration, Instant};

const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Ratatui-based brand browser
pub struct Browser<C = SystemClipboard> {
    theme: Theme,
    clipboard: C,
}

impl Browser {
    /// Browser with the default theme and the system clipboard
    #[must_use]
    pub fn new() -> Self {
        Self::with_clipboard(SystemClipboard::default())
    }
}

impl Default for Browser {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clipboard> Browser<C> {
    /// Browser writing copied text to `clipboard`
    #[must_use]
    pub fn with_clipboard(clipboard: C) -> Self {
        Self {
            theme: Theme::default(),
            clipboard,
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        if !io::stdout().is_terminal() {
            return Err(UiError::Terminal("stdout is not a terminal".to_string()));
        }
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the browser until the user quits
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up or drawn to.
    pub fn run(&mut self, state: &mut AppState<'_>) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        tracing::info!(brands = state.catalog().len(), "Browser started");

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, state);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }

    fn run_loop<B>(&mut self, terminal: &mut Terminal<B>, state: &mut AppState<'_>) -> Result<()>
    where
        B: Backend<Error = io::Error>,
    {
        loop {
            state.tick(Instant::now());
            terminal.draw(|frame| render(frame, state, &self.theme))?;

            match poll_and_handle(state, POLL_TIMEOUT)? {
                EventResult::Copy => self.copy_contact(state, Instant::now()),
                EventResult::Exit => break,
                EventResult::Continue | EventResult::QueryChanged | EventResult::Ignored => {}
            }
            if state.should_exit {
                break;
            }
        }
        tracing::info!("Browser closed");
        Ok(())
    }

    /// Copy the contact address and record the outcome for the footer
    fn copy_contact(&mut self, state: &mut AppState<'_>, now: Instant) {
        match contact::copy_contact(&mut self.clipboard) {
            Ok(()) => state.copy_succeeded(now),
            Err(e) => state.copy_failed(&e),
        }
    }
}

/// Draw one frame
fn render(frame: &mut Frame, state: &mut AppState<'_>, theme: &Theme) {
    let home = state.view == View::Home;
    let [header, hero, search, content, status, footer, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(if home { 3 } else { 0 }),
        Constraint::Length(if home { 3 } else { 0 }),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, state.view, theme);

    match state.view {
        View::Home => {
            let hero_lines = vec![
                Line::styled(HERO_TITLE, theme.heading_style()),
                Line::raw(hero_text(state.catalog().len())),
            ];
            frame.render_widget(Paragraph::new(hero_lines).alignment(Alignment::Center), hero);

            let search_bar = SearchBar::new(&state.home.listing.query, theme).focused(state.mode == Mode::Normal);
            frame.render_widget(search_bar, search);

            let table = BrandTable::new(theme, state.tier_order, state.flag_style);
            frame.render_stateful_widget(table, content, &mut state.home);
        }
        View::About => {
            frame.render_widget(AboutView::new(theme).scroll(state.about_scroll), content);
        }
    }

    let now = Instant::now();
    let messages = state.active_messages(now);
    let status_bar = StatusBar::new(&messages, theme).with_counts(state.home.rows.len(), state.catalog().len());
    frame.render_widget(status_bar, status);

    frame.render_widget(Footer::new(theme).copied(state.copied_text(now)), footer);

    let hints = HelpBar::hints_for(state.view);
    frame.render_widget(HelpBar::new(&hints, theme), help);

    if state.mode == Mode::Help {
        frame.render_widget(HelpOverlay::new(theme), frame.area());
    }
}

fn render_header(frame: &mut Frame, area: Rect, view: View, theme: &Theme) {
    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(label, theme.cursor_style())
        } else {
            Span::styled(label, theme.dimmed_style())
        }
    };

    frame.render_widget(Paragraph::new(Line::styled(HEADER_TITLE, theme.heading_style())), area);
    let tabs = Line::from(vec![
        tab("Hem", view == View::Home),
        Span::styled(" | ", theme.dimmed_style()),
        tab("Om", view == View::About),
    ]);
    frame.render_widget(Paragraph::new(tabs).alignment(Alignment::Right), area);
}
