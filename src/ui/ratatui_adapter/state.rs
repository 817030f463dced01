//! Application state for the ratatui TUI
//!
//! Manages all mutable state of the brand browser: the search and sort state,
//! the derived row list, cursor and scrolling, expanded rows, the active view
//! and transient messages.

use crate::catalog::{Brand, Catalog};
use crate::contact::COPIED_MESSAGE;
use crate::flag::FlagStyle;
use crate::hierarchy::TierOrder;
use crate::search::{Listing, SortColumn};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// How long the "copied" confirmation stays visible
pub const COPIED_TTL: Duration = Duration::from_secs(2);

/// Top-level page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Brand directory
    #[default]
    Home,
    /// Static about page
    About,
}

impl View {
    /// The other view
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Home => Self::About,
            Self::About => Self::Home,
        }
    }
}

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Error,
    Warning,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) > ttl
    }
}

/// A flag that switches itself off after a fixed delay
///
/// Re-triggering restarts the delay; the deadline is checked on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransientFlag {
    set_at: Option<Instant>,
    ttl: Duration,
}

impl TransientFlag {
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self { set_at: None, ttl }
    }

    /// Switch on, replacing any pending deadline
    pub const fn trigger(&mut self, now: Instant) {
        self.set_at = Some(now);
    }

    pub const fn clear(&mut self) {
        self.set_at = None;
    }

    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.set_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.ttl)
    }

    /// Drop the flag once its deadline has passed
    pub fn tick(&mut self, now: Instant) {
        if self.set_at.is_some() && !self.is_active(now) {
            self.set_at = None;
        }
    }
}

/// Screen positions recorded while drawing the table, used for mouse hits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Header line and the x-range of each sortable column
    pub header: Option<(u16, Vec<(u16, u16, SortColumn)>)>,
    /// Screen line to row index
    pub rows: Vec<(u16, usize)>,
}

impl HitMap {
    /// Column header under a screen position
    #[must_use]
    pub fn column_at(&self, x: u16, y: u16) -> Option<SortColumn> {
        let (header_y, columns) = self.header.as_ref()?;
        if *header_y != y {
            return None;
        }
        columns
            .iter()
            .find(|(start, end, _)| (*start..*end).contains(&x))
            .map(|(_, _, column)| *column)
    }

    /// Row index drawn on a screen line
    #[must_use]
    pub fn row_at(&self, y: u16) -> Option<usize> {
        self.rows.iter().find(|(line, _)| *line == y).map(|(_, row)| *row)
    }
}

/// State of the directory view; rebuilt whenever the view is entered
#[derive(Debug, Clone)]
pub struct HomeState<'a> {
    pub listing: Listing,
    /// Filtered and sorted rows
    pub rows: Vec<&'a Brand>,
    /// Current cursor position in `rows`
    pub cursor: usize,
    /// First row drawn
    pub scroll_offset: usize,
    /// Number of table lines visible (set during render)
    pub visible_height: usize,
    /// Ids of expanded rows
    pub expanded: HashSet<u32>,
    /// Mouse targets from the last render
    pub hits: HitMap,
}

impl<'a> HomeState<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, listing: Listing) -> Self {
        let rows = listing.rows(catalog);
        Self {
            listing,
            rows,
            cursor: 0,
            scroll_offset: 0,
            visible_height: 20,
            expanded: HashSet::new(),
            hits: HitMap::default(),
        }
    }

    /// Recompute rows after the query or sort changed
    pub fn refresh(&mut self, catalog: &'a Catalog) {
        self.rows = self.listing.rows(catalog);
        if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len().saturating_sub(1);
        }
        self.scroll_offset = self.scroll_offset.min(self.cursor);
    }

    /// Brand under the cursor
    #[must_use]
    pub fn current(&self) -> Option<&'a Brand> {
        self.rows.get(self.cursor).copied()
    }

    #[must_use]
    pub fn is_expanded(&self, id: u32) -> bool {
        self.expanded.contains(&id)
    }

    /// Open or close the row under the cursor
    pub fn toggle_expanded(&mut self) -> Option<bool> {
        let id = self.current()?.id;
        let now_open = if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        };
        tracing::debug!(id, expanded = now_open, "Toggled row");
        Some(now_open)
    }

    pub const fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    pub const fn cursor_down(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    pub const fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    pub fn page_down(&mut self) {
        let max_cursor = self.rows.len().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.adjust_scroll();
    }

    pub const fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    pub const fn jump_to_end(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Put the cursor on a row (mouse click)
    pub const fn select(&mut self, row: usize) {
        if row < self.rows.len() {
            self.cursor = row;
            self.adjust_scroll();
        }
    }

    /// Adjust scroll offset to keep cursor visible, assuming one line per row
    const fn adjust_scroll(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.visible_height > 0 && self.cursor >= self.scroll_offset + self.visible_height {
            self.scroll_offset = self.cursor.saturating_sub(self.visible_height - 1);
        }
    }

    /// Move the scroll offset so the cursor row fits, given each row's height
    pub fn fit_cursor(&mut self, row_heights: &[usize], height: usize) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        }
        while self.scroll_offset < self.cursor {
            let used: usize = row_heights
                .get(self.scroll_offset..=self.cursor)
                .map_or(0, |h| h.iter().sum());
            if used <= height {
                break;
            }
            self.scroll_offset += 1;
        }
    }
}

/// Application state for the brand browser
#[derive(Debug)]
pub struct AppState<'a> {
    catalog: &'a Catalog,
    /// Listing the directory view starts from
    initial: Listing,
    pub home: HomeState<'a>,
    pub view: View,
    pub mode: Mode,
    /// Scroll position of the about page
    pub about_scroll: u16,
    /// "E-post kopierad!" confirmation
    pub copied: TransientFlag,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    pub tier_order: TierOrder,
    pub flag_style: FlagStyle,
    /// Whether the browser should exit
    pub should_exit: bool,
}

impl<'a> AppState<'a> {
    /// Create new application state over a catalog
    #[must_use]
    pub fn new(catalog: &'a Catalog, listing: Listing, tier_order: TierOrder, flag_style: FlagStyle) -> Self {
        Self {
            catalog,
            home: HomeState::new(catalog, listing.clone()),
            initial: listing,
            view: View::Home,
            mode: Mode::Normal,
            about_scroll: 0,
            copied: TransientFlag::new(COPIED_TTL),
            messages: Vec::new(),
            message_ttl: Duration::from_secs(4),
            tier_order,
            flag_style,
            should_exit: false,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Recompute rows from the current listing
    pub fn refresh(&mut self) {
        self.home.refresh(self.catalog);
    }

    /// Commit the live input as a search tag
    pub fn commit_input(&mut self) -> bool {
        let text = self.home.listing.query.current_input().trim().to_string();
        let added = self.home.listing.query.commit_input();
        if added {
            tracing::debug!(tag = %text, "Added search tag");
            self.refresh();
        } else if !text.is_empty() {
            self.push_message(MessageLevel::Warning, format!("Taggen \"{text}\" finns redan"));
        }
        added
    }

    /// Escape in the search box: input first, then all tags
    ///
    /// Returns `false` when there was nothing to clear.
    pub fn clear_search(&mut self) -> bool {
        let query = &mut self.home.listing.query;
        if query.is_empty() {
            query.clear_all();
            return false;
        }
        query.clear();
        self.refresh();
        true
    }

    /// Remove the most recently added tag
    pub fn pop_tag(&mut self) -> Option<String> {
        let removed = self.home.listing.query.pop_tag();
        if removed.is_some() {
            self.refresh();
        }
        removed
    }

    /// Header click on a column
    pub fn sort_by(&mut self, column: SortColumn) {
        self.home.listing.sort.handle_sort(column);
        self.refresh();
    }

    /// Switch between the directory and the about page
    ///
    /// Leaving a view drops its state: the directory starts over from the
    /// initial listing and the copied confirmation is cleared.
    pub fn switch_view(&mut self) {
        self.view = self.view.toggled();
        self.home = HomeState::new(self.catalog, self.initial.clone());
        self.about_scroll = 0;
        self.copied.clear();
        tracing::debug!(view = ?self.view, "Switched view");
    }

    /// Record a successful contact copy
    pub fn copy_succeeded(&mut self, now: Instant) {
        self.copied.trigger(now);
    }

    /// Record a failed contact copy
    pub fn copy_failed(&mut self, error: &str) {
        tracing::warn!("Clipboard copy failed: {error}");
        self.copied.clear();
        self.push_message(MessageLevel::Error, error.to_string());
    }

    /// Text for the contact area of the footer
    #[must_use]
    pub fn copied_text(&self, now: Instant) -> Option<&'static str> {
        self.copied.is_active(now).then_some(COPIED_MESSAGE)
    }

    /// Add a status message
    pub fn push_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Messages that have not expired
    #[must_use]
    pub fn active_messages(&self, now: Instant) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(now, self.message_ttl))
            .collect()
    }

    /// Expire timed state; called once per loop iteration
    pub fn tick(&mut self, now: Instant) {
        self.copied.tick(now);
        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(now, ttl));
    }
}
