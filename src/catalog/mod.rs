//! Brand catalog
//!
//! The catalog is an immutable, ordered list of brands loaded once per process.
//! The register ships inside the binary (`data/brands.json`); a different file
//! with the same schema can be configured instead.
//!
//! # Examples
//!
//! ```
//! use svenskdb::catalog::Catalog;
//!
//! let catalog = Catalog::bundled().unwrap();
//! assert!(!catalog.is_empty());
//! let first = &catalog.brands()[0];
//! assert_eq!(catalog.get(first.id), Some(first));
//! ```

pub mod error;
pub mod types;

pub use error::CatalogError;
pub use types::{
    Brand, BrandDetails, ManufacturingStatus, OwnershipNode, REFERENCE_COUNTRY, SiblingBrand,
    Structure,
};

use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The register compiled into the binary
pub const BUNDLED_DATASET: &str = include_str!("../../data/brands.json");

/// Immutable, ordered collection of brands with unique ids
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    brands: Vec<Brand>,
}

impl Catalog {
    /// Build a catalog from records, rejecting duplicate ids
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` for the first id seen twice.
    pub fn from_brands(brands: Vec<Brand>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(brands.len());
        for brand in &brands {
            if !seen.insert(brand.id) {
                return Err(CatalogError::DuplicateId(brand.id));
            }
        }
        Ok(Self { brands })
    }

    /// Parse a JSON array of brand records
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the JSON does not match the schema, or
    /// `CatalogError::DuplicateId` if ids collide.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let brands: Vec<Brand> = serde_json::from_str(json)?;
        Self::from_brands(brands)
    }

    /// Load the register bundled with the binary
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled file is malformed.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Load a dataset file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise the
    /// errors of [`Catalog::from_json`].
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load the configured dataset, or the bundled register when none is set
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the selected dataset cannot be loaded.
    pub fn load(dataset: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match dataset {
            Some(path) => Self::from_path(path)?,
            None => Self::bundled()?,
        };
        tracing::info!(
            brands = catalog.len(),
            source = %dataset.map_or_else(|| "bundled".to_string(), |p| p.display().to_string()),
            "Loaded brand catalog"
        );
        Ok(catalog)
    }

    /// All brands in dataset order
    #[must_use]
    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.brands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    /// Look up a brand by id
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id == id)
    }

    /// Look up a brand by name, ignoring case
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Brand> {
        let wanted = name.trim().to_lowercase();
        self.brands.iter().find(|b| b.name.to_lowercase() == wanted)
    }

    /// Resolve a user reference: numeric id first, then name
    #[must_use]
    pub fn resolve(&self, reference: &str) -> Option<&Brand> {
        reference
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(|id| self.get(id))
            .or_else(|| self.find_by_name(reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{brand, sample_catalog};
    use std::io::Write;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.len() > 10);

        let ids: HashSet<u32> = catalog.brands().iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_bundled_catalog_has_both_structure_shapes() {
        let catalog = Catalog::bundled().unwrap();
        let structures = catalog.brands().iter().map(|b| &b.details.structure);
        let nodes = structures.clone().filter(|s| s.as_node().is_some()).count();
        let legacy = structures.filter(|s| s.as_node().is_none()).count();
        assert!(nodes > 0);
        assert!(legacy > 0);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let brands = vec![
            brand(1, "Alfa", "Skor", ManufacturingStatus::Yes),
            brand(1, "Beta", "Kläder", ManufacturingStatus::No),
        ];
        let result = Catalog::from_brands(brands);
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_empty_json_array_is_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let result = Catalog::from_json("{\"id\": 1}");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_from_path_reads_dataset_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 3, "varumärke": "Öland", "kategori": "Mat", "tillverkadISverige": "Ja"}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(Some(file.path())).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.brands()[0].name, "Öland");
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = Catalog::from_path(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_lookup_by_id_and_name() {
        let catalog = sample_catalog();

        assert_eq!(catalog.get(2).map(|b| b.name.as_str()), Some("Beta"));
        assert!(catalog.get(99).is_none());
        assert_eq!(catalog.find_by_name("alfa2").map(|b| b.id), Some(3));
        assert_eq!(catalog.resolve("1").map(|b| b.name.as_str()), Some("Alfa"));
        assert_eq!(catalog.resolve(" BETA ").map(|b| b.id), Some(2));
        assert!(catalog.resolve("Gamma").is_none());
    }
}
