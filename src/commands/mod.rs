//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the loaded catalog.

pub mod about;
pub mod browse;
pub mod completions;
pub mod config;
pub mod contact;
pub mod list;
pub mod show;

// Re-export execute functions for convenience
pub use about::execute as about;
pub use browse::execute as browse;
pub use completions::execute as completions;
pub use config::execute as config;
pub use contact::execute as contact;
pub use list::execute as list;
pub use show::execute as show;
