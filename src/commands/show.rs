//! Show command - details and ownership tree of one brand

use crate::{
    Result, SvdbError,
    catalog::Catalog,
    flag::FlagStyle,
    hierarchy::TierOrder,
    output,
};

/// Execute the show command
///
/// # Errors
///
/// Returns `SvdbError::InvalidInput` if no brand matches the reference.
pub fn execute(catalog: &Catalog, reference: &str, order: TierOrder, style: FlagStyle, quiet: bool) -> Result<()> {
    let brand = catalog
        .resolve(reference)
        .ok_or_else(|| SvdbError::InvalidInput(format!("No brand matching '{reference}'")))?;

    if quiet {
        println!("{}\t{}\t{}", brand.name, brand.category, brand.manufacturing_status);
    } else {
        output::print_details(brand, order, style);
    }
    Ok(())
}
