//! Ratatui-based brand browser
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Browser                     │
//! │   (terminal setup, event loop, clipboard)   │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Ratatui  │ │ Crossterm │
//! │ (listing)  │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```

mod browser;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use browser::Browser;
pub use events::{EventResult, handle_key, handle_mouse};
pub use state::{AppState, HomeState, MessageLevel, Mode, StatusMessage, TransientFlag, View};
pub use theme::Theme;
