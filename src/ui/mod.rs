//! Terminal user interface
//!
//! The interactive directory is built on ratatui for drawing and crossterm for
//! terminal control and input. Business logic stays in [`crate::search`] and
//! [`crate::hierarchy`]; this layer only holds view state and renders it.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Svensk Databas av Maximilian        Hem | Om │  header
//! │ Svensk databas                               │  hero
//! │ ┌ Sök ─────────────────────────────────────┐ │
//! │ │ [skor ×] [ja ×] vag│                     │ │  search bar
//! │ └──────────────────────────────────────────┘ │
//! │ ┌ Varumärken ──────────────────────────────┐ │
//! │ │ Varumärke ▲     Kategori     Tillverkad  │ │  brand table
//! │ │ > Vagabond      Skor         Nej         │ │
//! │ └──────────────────────────────────────────┘ │
//! │ 1 av 24 varumärken                           │  status bar
//! │ Svensk databas · Transparens kring ...       │  footer
//! │ Enter:tagg  Esc:rensa  F2-F4:sortera F1:hjälp │  help bar
//! └──────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use ratatui_adapter::{AppState, Browser, View};
