//! Brand filtering used by the directory listing
//!
//! A search term matches a brand when it occurs, ignoring case, in the brand
//! name, its category, or its manufacturing status label (`Ja`, `Delvis`,
//! `Nej`). Committed tags are AND-combined; the live input is then applied as
//! one more term with the same rule.
//!
//! ```
//! use svenskdb::catalog::Catalog;
//! use svenskdb::search::{filter, TagQuery};
//!
//! let catalog = Catalog::bundled().unwrap();
//! let query = TagQuery::with_tags(["Ja"]);
//! let rows = filter::filter(catalog.brands(), query.tags(), query.current_input());
//! assert!(rows.len() <= catalog.len());
//! ```

use super::TagQuery;
use crate::catalog::Brand;

/// A search term, case-folded once for repeated matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term(String);

impl Term {
    /// Fold a raw term; returns `None` for blank text
    #[must_use]
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    /// Check name, category and status label
    #[must_use]
    pub fn matches(&self, brand: &Brand) -> bool {
        let needle = self.0.as_str();
        brand.name.to_lowercase().contains(needle)
            || brand.category.to_lowercase().contains(needle)
            || brand
                .manufacturing_status
                .label()
                .to_lowercase()
                .contains(needle)
    }
}

/// Filter brands by committed tags (AND) and then by the live input
///
/// Order of the input slice is preserved. Blank tags are ignored; with no
/// tags and a blank input every brand is returned.
#[must_use]
pub fn filter<'a>(brands: &'a [Brand], tags: &[String], current_input: &str) -> Vec<&'a Brand> {
    let tag_terms: Vec<Term> = tags.iter().filter_map(|t| Term::new(t)).collect();
    let live = Term::new(current_input);

    brands
        .iter()
        .filter(|brand| tag_terms.iter().all(|term| term.matches(brand)))
        .filter(|brand| live.as_ref().is_none_or(|term| term.matches(brand)))
        .collect()
}

/// Filter with the tags and input held by a [`TagQuery`]
#[must_use]
pub fn filter_query<'a>(brands: &'a [Brand], query: &TagQuery) -> Vec<&'a Brand> {
    filter(brands, query.tags(), query.current_input())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ManufacturingStatus;
    use crate::testing::{brand, sample_catalog};

    fn names(rows: &[&Brand]) -> Vec<String> {
        rows.iter().map(|b| b.name.clone()).collect()
    }

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_no_tags_no_input_returns_everything() {
        let catalog = sample_catalog();
        let rows = filter(catalog.brands(), &[], "");
        assert_eq!(names(&rows), ["Alfa", "Beta", "Alfa2"]);
    }

    #[test]
    fn test_empty_catalog() {
        let rows = filter(&[], &tags(&["skor"]), "alfa");
        assert!(rows.is_empty());
    }

    #[test]
    fn test_tag_matches_category_case_insensitive() {
        let catalog = sample_catalog();
        let rows = filter(catalog.brands(), &tags(&["skor"]), "");
        assert_eq!(names(&rows), ["Alfa", "Alfa2"]);
    }

    #[test]
    fn test_tags_are_and_combined() {
        let brands = vec![
            brand(1, "Ecco", "Skor", ManufacturingStatus::No),
            brand(2, "Vagabond", "Skor", ManufacturingStatus::Yes),
            brand(3, "Hästens", "Sängar", ManufacturingStatus::Yes),
        ];

        let rows = filter(&brands, &tags(&["skor", "Ja"]), "");
        assert_eq!(names(&rows), ["Vagabond"]);
    }

    #[test]
    fn test_tag_matches_status_label() {
        let catalog = sample_catalog();
        let rows = filter(catalog.brands(), &tags(&["delvis"]), "");
        assert_eq!(names(&rows), ["Alfa2"]);
    }

    #[test]
    fn test_unicode_case_folding() {
        let brands = vec![
            brand(1, "öland", "Mat", ManufacturingStatus::Yes),
            brand(2, "Gotland", "Mat", ManufacturingStatus::Yes),
        ];
        let rows = filter(&brands, &tags(&["Ö"]), "");
        assert_eq!(names(&rows), ["öland"]);

        let rows = filter(&brands, &[], "ÖLA");
        assert_eq!(names(&rows), ["öland"]);
    }

    #[test]
    fn test_live_input_narrows_tag_result() {
        let catalog = sample_catalog();
        let rows = filter(catalog.brands(), &tags(&["skor"]), "alfa");
        assert_eq!(names(&rows), ["Alfa", "Alfa2"]);

        let rows = filter(catalog.brands(), &tags(&["skor"]), "  alfa2 ");
        assert_eq!(names(&rows), ["Alfa2"]);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let catalog = sample_catalog();
        let rows = filter(catalog.brands(), &tags(&["kläder"]), "   ");
        assert_eq!(names(&rows), ["Beta"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = sample_catalog();
        let terms = tags(&["alfa"]);
        let first = filter(catalog.brands(), &terms, "skor");
        let owned: Vec<Brand> = first.iter().map(|b| (*b).clone()).collect();
        let second = filter(&owned, &terms, "skor");
        assert_eq!(names(&first), names(&second));
    }

    #[test]
    fn test_filter_query_uses_tags_and_input() {
        let catalog = sample_catalog();
        let mut query = TagQuery::with_tags(["skor"]);
        query.set_input("2");
        let rows = filter_query(catalog.brands(), &query);
        assert_eq!(names(&rows), ["Alfa2"]);
    }
}
