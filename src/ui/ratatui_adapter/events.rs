//! Event handling for the ratatui TUI
//!
//! Handles keyboard and mouse events, mapping them to application actions.

use super::state::{AppState, Mode, View};
use super::widgets::AboutView;
use crate::search::SortColumn;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// Lines moved per page on the about page
const ABOUT_PAGE: u16 = 10;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Query changed and rows were recomputed
    QueryChanged,
    /// Copy the contact address to the clipboard
    Copy,
    /// Leave the browser
    Exit,
    /// No action taken
    Ignored,
}

/// Handle a key press
pub fn handle_key(state: &mut AppState<'_>, key: KeyEvent) -> EventResult {
    if key.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }

    // Any key closes help
    if state.mode == Mode::Help {
        state.mode = Mode::Normal;
        return EventResult::Continue;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            EventResult::Exit
        }
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => EventResult::Copy,
        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }
        (KeyCode::Tab | KeyCode::BackTab, _) => {
            state.switch_view();
            EventResult::Continue
        }
        _ => match state.view {
            View::Home => handle_home_key(state, key),
            View::About => handle_about_key(state, key),
        },
    }
}

fn handle_home_key(state: &mut AppState<'_>, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Search box
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => {
            if state.pop_tag().is_some() {
                EventResult::QueryChanged
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.home.listing.query.push_char(c);
            state.refresh();
            EventResult::QueryChanged
        }
        (KeyCode::Backspace, _) => {
            if state.home.listing.query.backspace() {
                state.refresh();
                EventResult::QueryChanged
            } else if state.pop_tag().is_some() {
                EventResult::QueryChanged
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Enter, _) => {
            if state.home.listing.query.current_input().trim().is_empty() {
                state.home.toggle_expanded();
                EventResult::Continue
            } else if state.commit_input() {
                EventResult::QueryChanged
            } else {
                EventResult::Continue
            }
        }
        (KeyCode::Esc, _) => {
            if state.clear_search() {
                EventResult::QueryChanged
            } else {
                state.should_exit = true;
                EventResult::Exit
            }
        }

        // Sorting
        (KeyCode::F(2), _) => sort(state, SortColumn::Name),
        (KeyCode::F(3), _) => sort(state, SortColumn::Category),
        (KeyCode::F(4), _) => sort(state, SortColumn::Status),

        // Navigation
        (KeyCode::Up, _) => {
            state.home.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.home.cursor_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.home.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.home.page_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.home.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.home.jump_to_end();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

fn handle_about_key(state: &mut AppState<'_>, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            state.switch_view();
            EventResult::Continue
        }
        KeyCode::Up => scroll_about(state, -1),
        KeyCode::Down => scroll_about(state, 1),
        KeyCode::PageUp => scroll_about(state, -i32::from(ABOUT_PAGE)),
        KeyCode::PageDown => scroll_about(state, i32::from(ABOUT_PAGE)),
        KeyCode::Home => {
            state.about_scroll = 0;
            EventResult::Continue
        }
        KeyCode::End => scroll_about(state, i32::from(u16::MAX)),
        _ => EventResult::Ignored,
    }
}

fn sort(state: &mut AppState<'_>, column: SortColumn) -> EventResult {
    state.sort_by(column);
    EventResult::QueryChanged
}

fn scroll_about(state: &mut AppState<'_>, delta: i32) -> EventResult {
    let max = i32::try_from(AboutView::line_count().saturating_sub(1)).unwrap_or(i32::from(u16::MAX));
    let next = (i32::from(state.about_scroll) + delta).clamp(0, max.min(i32::from(u16::MAX)));
    state.about_scroll = u16::try_from(next).unwrap_or(0);
    EventResult::Continue
}

/// Handle mouse events
pub fn handle_mouse(state: &mut AppState<'_>, mouse: MouseEvent) -> EventResult {
    if state.mode == Mode::Help {
        return EventResult::Ignored;
    }

    match (state.view, mouse.kind) {
        (View::Home, MouseEventKind::ScrollUp) => {
            state.home.cursor_up();
            EventResult::Continue
        }
        (View::Home, MouseEventKind::ScrollDown) => {
            state.home.cursor_down();
            EventResult::Continue
        }
        (View::About, MouseEventKind::ScrollUp) => scroll_about(state, -1),
        (View::About, MouseEventKind::ScrollDown) => scroll_about(state, 1),
        (View::Home, MouseEventKind::Down(MouseButton::Left)) => {
            if let Some(column) = state.home.hits.column_at(mouse.column, mouse.row) {
                return sort(state, column);
            }
            match state.home.hits.row_at(mouse.row) {
                Some(row) => {
                    state.home.select(row);
                    state.home.toggle_expanded();
                    EventResult::Continue
                }
                None => EventResult::Ignored,
            }
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState<'_>, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
