//! Diagnostic logging
//!
//! Events go through `tracing`. The filter comes from `SVENSKDB_LOG` when set,
//! otherwise from the configured `log_level`. The TUI owns the terminal, so the
//! browser logs to a file in the cache directory; other commands log to stderr.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured log level
pub const LOG_ENV: &str = "SVENSKDB_LOG";

/// Where log events are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// Log file used while the browser is running
    ///
    /// Falls back to stderr when no cache directory is known.
    #[must_use]
    pub fn for_browser() -> Self {
        dirs::cache_dir().map_or(Self::Stderr, |dir| {
            Self::File(dir.join("svenskdb").join("svenskdb.log"))
        })
    }
}

/// Filter directive to use: environment first, then configuration
#[must_use]
pub fn directive(env_value: Option<String>, configured: &str) -> String {
    env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| configured.to_string())
}

/// Install the global subscriber
///
/// Calling this twice keeps the first subscriber.
///
/// # Errors
///
/// Returns `io::Error` if the log file cannot be opened.
pub fn init(configured_level: &str, target: &LogTarget) -> io::Result<()> {
    let directive = directive(std::env::var(LOG_ENV).ok(), configured_level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let result = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_config() {
        assert_eq!(directive(Some("debug".to_string()), "warn"), "debug");
        assert_eq!(directive(None, "info"), "info");
        assert_eq!(directive(Some("  ".to_string()), "warn"), "warn");
    }

    #[test]
    fn test_file_target_creates_log() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logs").join("svenskdb.log");
        init("warn", &LogTarget::File(path.clone())).unwrap();
        assert!(path.exists());
    }
}
