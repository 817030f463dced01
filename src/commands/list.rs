//! List command - print the filtered and sorted brand listing

use crate::{
    Result,
    catalog::{Brand, Catalog},
    cli::OutputFormat,
    output,
    search::Listing,
};
use std::io::{self, Write};

/// Execute the list command
///
/// # Errors
///
/// Returns `SvdbError` if writing CSV or JSON output fails.
pub fn execute(catalog: &Catalog, listing: &Listing, format: OutputFormat, quiet: bool) -> Result<()> {
    let rows = listing.rows(catalog);
    tracing::debug!(rows = rows.len(), tags = ?listing.query.tags(), "Listing brands");

    match format {
        OutputFormat::Table => {
            if rows.is_empty() {
                if !quiet {
                    println!("Inga varumärken matchar sökningen.");
                }
                return Ok(());
            }
            output::print_table(&rows, &listing.sort, quiet);
            if !quiet {
                println!("\n{} av {} varumärken", rows.len(), catalog.len());
            }
        }
        OutputFormat::Csv | OutputFormat::Json => write_rows(&rows, format, io::stdout().lock())?,
    }
    Ok(())
}

/// Write machine-readable rows
///
/// # Errors
///
/// Returns `SvdbError` if serialization or writing fails.
pub fn write_rows<W: Write>(
    rows: &[&Brand],
    format: OutputFormat,
    writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Csv => output::write_csv(rows, writer)?,
        OutputFormat::Json | OutputFormat::Table => output::write_json(rows, writer)?,
    }
    Ok(())
}
