//! Svenskdb - a directory of Swedish brands and where they are made
//!
//! This library holds the brand register, search and sorting of the listing,
//! ownership hierarchies, and the terminal browser built on top of them.

use thiserror::Error;

pub mod about;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod contact;
pub mod flag;
pub mod hierarchy;
pub mod logging;
pub mod output;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum SvdbError {
    /// Brand register could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Terminal UI failure
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// System clipboard unavailable or rejected the text
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    /// CSV output failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type used by commands
pub type Result<T> = std::result::Result<T, SvdbError>;
