//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for svenskdb using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive brand directory (default)
//! - **list**: Print the filtered and sorted listing (table, CSV or JSON)
//! - **show**: Details and ownership tree of one brand
//! - **about**: About the directory
//! - **contact**: Copy the contact address to the clipboard
//! - **config**: Get or set configuration values
//! - **completions**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```
//! use svenskdb::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["svenskdb", "list", "-t", "skor", "-s", "name"]);
//! assert!(matches!(cli.get_command(), Commands::List { .. }));
//! ```

use crate::search::{SortColumn, SortDirection, SortState, TagQuery};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Column to sort the listing by
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortArg {
    /// Brand name (Swedish alphabetical order)
    #[value(alias = "varumarke")]
    Name,
    /// Category
    #[value(alias = "kategori")]
    Category,
    /// Manufacturing status (Ja, Delvis, Nej)
    Status,
}

impl From<SortArg> for SortColumn {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => Self::Name,
            SortArg::Category => Self::Category,
            SortArg::Status => Self::Status,
        }
    }
}

/// Output format for the list command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned table
    #[default]
    Table,
    /// Comma-separated values with the dataset's field names
    Csv,
    /// Full records as JSON
    Json,
}

/// Search arguments shared by browse and list
#[derive(clap::Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Search tags, all of which must match (can specify multiple: -t skor -t ja)
    #[arg(short = 't', long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Text in the search box, applied on top of the tags
    #[arg(short = 'q', long = "query", value_name = "TEXT")]
    pub query: Option<String>,
}

impl QueryArgs {
    /// Search state with the tags committed and the query as live input
    #[must_use]
    pub fn to_query(&self) -> TagQuery {
        let mut query = TagQuery::with_tags(self.tags.iter().map(String::as_str));
        if let Some(text) = &self.query {
            query.set_input(text);
        }
        query
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "svenskdb")]
#[command(about = "Swedish brands and where they are made", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive directory (default)
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Print the brand listing
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        query: QueryArgs,

        /// Sort column
        #[arg(short = 's', long = "sort", value_enum)]
        sort: Option<SortArg>,

        /// Sort descending instead of ascending
        #[arg(long = "desc", requires = "sort")]
        desc: bool,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show details and ownership of a brand
    #[command(visible_alias = "s")]
    Show {
        /// Brand id or name
        #[arg(value_name = "BRAND")]
        brand: String,
    },

    /// About the directory and how brands are classified
    About,

    /// Copy the contact address to the clipboard
    Contact,

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., tier_order=owner-first)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., flag_style)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the path of the config file
    Path,
}

impl Commands {
    /// Sort state requested by `list`
    #[must_use]
    pub fn sort_state(&self) -> SortState {
        match self {
            Self::List {
                sort: Some(column),
                desc,
                ..
            } => {
                let direction = if *desc {
                    SortDirection::Desc
                } else {
                    SortDirection::Asc
                };
                SortState::by((*column).into(), direction)
            }
            _ => SortState::new(),
        }
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            query: QueryArgs::default(),
        })
    }
}
