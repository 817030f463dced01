//! svenskdb CLI application entry point
//!
//! Swedish brands, where their products are made and who owns them.
//!
//! # Usage
//!
//! ```bash
//! # Open the interactive directory (default command)
//! svenskdb
//! svenskdb browse -t skor
//!
//! # Print the listing, filtered and sorted
//! svenskdb list -t kläder -s status --desc
//! svenskdb l -q volvo -f json
//!
//! # Details and ownership tree of one brand
//! svenskdb show Fjällräven
//!
//! # Settings
//! svenskdb config set flag_style=code
//! ```
//!
//! # Configuration
//!
//! Settings are read from the user's config directory
//! (`~/.config/svenskdb/config.toml` on Linux); a default file is created on
//! first run.

use svenskdb::{
    Result,
    catalog::Catalog,
    cli::{Cli, Commands},
    commands,
    config::SvdbConfig,
    logging::{self, LogTarget},
    search::Listing,
};

fn main() -> Result<()> {
    let config = SvdbConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    let command = cli.get_command();

    let target = if matches!(command, Commands::Browse { .. }) {
        LogTarget::for_browser()
    } else {
        LogTarget::Stderr
    };
    if let Err(e) = logging::init(&config.log_level, &target) {
        eprintln!("Warning: logging disabled: {e}");
    }

    match &command {
        Commands::Browse { query } => {
            let catalog = load_catalog(&config)?;
            let listing = Listing::new(query.to_query(), command.sort_state());
            commands::browse(&catalog, listing, &config)?;
        }
        Commands::List { query, format, .. } => {
            let catalog = load_catalog(&config)?;
            let listing = Listing::new(query.to_query(), command.sort_state());
            commands::list(&catalog, &listing, *format, quiet)?;
        }
        Commands::Show { brand } => {
            let catalog = load_catalog(&config)?;
            commands::show(&catalog, brand, config.tier_order, config.flag_style, quiet)?;
        }
        Commands::About => commands::about(load_catalog(&config)?.len()),
        Commands::Contact => commands::contact(quiet)?,
        Commands::Config { command } => commands::config(config, command, quiet)?,
        Commands::Completions { shell } => commands::completions(*shell),
    }

    Ok(())
}

/// Load the configured dataset, or the bundled one
fn load_catalog(config: &SvdbConfig) -> Result<Catalog> {
    let catalog = Catalog::load(config.dataset.as_deref())?;
    tracing::debug!(brands = catalog.len(), dataset = ?config.dataset, "Catalog loaded");
    Ok(catalog)
}
