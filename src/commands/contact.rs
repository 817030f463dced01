//! Contact command - copy the contact address to the clipboard

use crate::{
    Result, SvdbError,
    contact::{COPIED_MESSAGE, CONTACT_EMAIL, CONTACT_HOLD, SystemClipboard},
};
use colored::Colorize;

/// Execute the contact command
///
/// # Errors
///
/// Returns `SvdbError::Clipboard` if the system clipboard is unavailable.
///
/// The process stays alive for up to [`CONTACT_HOLD`] so the copied address
/// survives on desktops without a clipboard manager.
pub fn execute(quiet: bool) -> Result<()> {
    let mut clipboard = SystemClipboard::default();
    clipboard
        .set_text_and_hold(CONTACT_EMAIL, CONTACT_HOLD)
        .map_err(|e| SvdbError::Clipboard(format!("{e} (address: {CONTACT_EMAIL})")))?;
    tracing::info!("Copied contact address to clipboard");

    if quiet {
        println!("{CONTACT_EMAIL}");
    } else {
        println!("{} {}", COPIED_MESSAGE.green(), CONTACT_EMAIL.dimmed());
    }
    Ok(())
}
