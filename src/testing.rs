//! Testing utilities for svenskdb
//!
//! Builders for brand records and a small fixed catalog shared by the unit
//! tests of the catalog, search and UI modules.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Brand, BrandDetails, Catalog, ManufacturingStatus, OwnershipNode, SiblingBrand, Structure};

/// Build a brand with empty details
#[must_use]
pub fn brand(id: u32, name: &str, category: &str, status: ManufacturingStatus) -> Brand {
    Brand {
        id,
        name: name.to_string(),
        category: category.to_string(),
        manufacturing_status: status,
        details: BrandDetails::default(),
    }
}

/// Build a sibling entry for an ownership node
#[must_use]
pub fn sibling(
    name: &str,
    country: &str,
    is_primary: bool,
    status: Option<ManufacturingStatus>,
) -> SiblingBrand {
    SiblingBrand {
        name: name.to_string(),
        country: Some(country.to_string()),
        is_primary,
        status,
    }
}

/// Ownership node with a parent company and the given siblings
#[must_use]
pub fn group(parent: &str, country: &str, siblings: Vec<SiblingBrand>) -> Structure {
    Structure::Node(OwnershipNode {
        parent_company: Some(parent.to_string()),
        parent_company_country: Some(country.to_string()),
        owner: None,
        owner_country: None,
        sibling_brands: siblings,
    })
}

/// Three-brand catalog used across the search tests
///
/// | id | name  | category | status |
/// |----|-------|----------|--------|
/// | 1  | Alfa  | Skor     | Ja     |
/// | 2  | Beta  | Kläder   | Nej    |
/// | 3  | Alfa2 | Skor     | Delvis |
///
/// # Panics
/// Never; the ids are unique.
#[must_use]
pub fn sample_catalog() -> Catalog {
    let mut alfa = brand(1, "Alfa", "Skor", ManufacturingStatus::Yes);
    alfa.details.parent_company = "Alfa Group AB".to_string();
    alfa.details.manufacturing_countries = vec!["Sverige".to_string()];
    alfa.details.structure = group(
        "Alfa Group AB",
        "SE",
        vec![
            sibling("Alfa", "SE", true, Some(ManufacturingStatus::Yes)),
            sibling("Alfa2", "SE", false, Some(ManufacturingStatus::Partial)),
        ],
    );

    let mut beta = brand(2, "Beta", "Kläder", ManufacturingStatus::No);
    beta.details.structure = Structure::Legacy("Ägs av Beta Holding".to_string());

    let alfa2 = brand(3, "Alfa2", "Skor", ManufacturingStatus::Partial);

    Catalog::from_brands(vec![alfa, beta, alfa2]).expect("sample ids are unique")
}
