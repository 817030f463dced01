//! Browse command - interactive brand directory

use crate::{
    Result,
    catalog::Catalog,
    config::SvdbConfig,
    search::Listing,
    ui::{AppState, Browser},
};

/// Execute the browse command
///
/// Starts the directory from `listing`, so tags given on the command line are
/// already committed when the browser opens.
///
/// # Errors
///
/// Returns `SvdbError::Ui` if the terminal cannot be used.
pub fn execute(catalog: &Catalog, listing: Listing, config: &SvdbConfig) -> Result<()> {
    let mut state = AppState::new(catalog, listing, config.tier_order, config.flag_style);
    Browser::new().run(&mut state)?;
    Ok(())
}
