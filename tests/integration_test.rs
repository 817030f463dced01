//! Integration tests for svenskdb
//!
//! These tests drive the library the way the commands do: load a catalog,
//! build a listing from tags and sort state, and render ownership trees.

use std::fs;
use svenskdb::catalog::{Catalog, CatalogError, ManufacturingStatus};
use svenskdb::commands::list::write_rows;
use svenskdb::cli::OutputFormat;
use svenskdb::flag::FlagStyle;
use svenskdb::hierarchy::{self, HierarchyView, TierOrder};
use svenskdb::output::{self, TreeLine};
use svenskdb::search::{Listing, SortColumn, SortDirection, SortState, TagQuery};

const THREE_BRANDS: &str = r#"[
  {"id": 1, "varumärke": "Alfa", "kategori": "Skor", "tillverkadISverige": "Ja",
   "merInfo": {"moderbolag": "", "ägare": "", "börsnoterat": "", "tillverkningsländer": [], "koncernstruktur": ""}},
  {"id": 2, "varumärke": "Beta", "kategori": "Kläder", "tillverkadISverige": "Nej",
   "merInfo": {"moderbolag": "", "ägare": "", "börsnoterat": "", "tillverkningsländer": [], "koncernstruktur": ""}},
  {"id": 3, "varumärke": "Alfa2", "kategori": "Skor", "tillverkadISverige": "Delvis",
   "merInfo": {"moderbolag": "", "ägare": "", "börsnoterat": "", "tillverkningsländer": [], "koncernstruktur": ""}}
]"#;

fn names(catalog: &Catalog, listing: &Listing) -> Vec<String> {
    listing.rows(catalog).iter().map(|b| b.name.clone()).collect()
}

fn tree(catalog: &Catalog, name: &str, order: TierOrder) -> Vec<String> {
    let brand = catalog.find_by_name(name).unwrap();
    output::tree_lines(&hierarchy::render_for(brand, order), FlagStyle::Code)
        .iter()
        .map(TreeLine::plain)
        .collect()
}

#[test]
fn test_search_tag_then_input_then_sort() {
    let catalog = Catalog::from_json(THREE_BRANDS).unwrap();
    let mut listing = Listing::default();

    listing.query.set_input("skor");
    assert!(listing.query.commit_input());
    assert_eq!(names(&catalog, &listing), ["Alfa", "Alfa2"]);

    listing.query.set_input("alfa");
    assert_eq!(names(&catalog, &listing), ["Alfa", "Alfa2"]);

    listing.sort.handle_sort(SortColumn::Name);
    assert_eq!(names(&catalog, &listing), ["Alfa", "Alfa2"]);
    listing.sort.handle_sort(SortColumn::Name);
    assert_eq!(names(&catalog, &listing), ["Alfa2", "Alfa"]);
}

#[test]
fn test_tags_are_and_combined() {
    let catalog = Catalog::from_json(THREE_BRANDS).unwrap();
    let listing = Listing::new(TagQuery::with_tags(["skor", "Ja"]), SortState::new());
    assert_eq!(names(&catalog, &listing), ["Alfa"]);

    let nothing = Listing::new(TagQuery::with_tags(["skor", "Nej"]), SortState::new());
    assert!(names(&catalog, &nothing).is_empty());
}

#[test]
fn test_status_sort_over_catalog() {
    let catalog = Catalog::from_json(THREE_BRANDS).unwrap();
    let listing = Listing::new(
        TagQuery::new(),
        SortState::by(SortColumn::Status, SortDirection::Asc),
    );
    let statuses: Vec<ManufacturingStatus> = listing
        .rows(&catalog)
        .iter()
        .map(|b| b.manufacturing_status)
        .collect();
    assert_eq!(
        statuses,
        vec![ManufacturingStatus::Yes, ManufacturingStatus::Partial, ManufacturingStatus::No]
    );
}

#[test]
fn test_bundled_catalog_loads() {
    let catalog = Catalog::bundled().unwrap();
    assert_eq!(catalog.len(), 24);
    assert_eq!(catalog.get(1).map(|b| b.name.as_str()), Some("Volvo Cars"));
    assert_eq!(catalog.resolve("fjällräven").map(|b| b.id), Some(2));
}

#[test]
fn test_bundled_search_is_case_insensitive() {
    let catalog = Catalog::bundled().unwrap();
    let listing = Listing::new(TagQuery::with_tags(["Ö"]), SortState::new());
    let found = names(&catalog, &listing);
    assert!(found.contains(&"Öresund Spirits".to_string()));
    assert!(found.contains(&"Åbro".to_string()));
}

#[test]
fn test_bundled_name_sort_puts_swedish_letters_last() {
    let catalog = Catalog::bundled().unwrap();
    let listing = Listing::new(
        TagQuery::new(),
        SortState::by(SortColumn::Name, SortDirection::Asc),
    );
    let sorted = names(&catalog, &listing);
    assert_eq!(sorted.first().map(String::as_str), Some("Absolut Vodka"));
    assert_eq!(&sorted[sorted.len() - 2..], ["Åbro", "Öresund Spirits"]);
}

#[test]
fn test_group_tree_with_parent_first() {
    let catalog = Catalog::bundled().unwrap();
    assert_eq!(
        tree(&catalog, "Fjällräven", TierOrder::ParentFirst),
        vec![
            "MODERBOLAG: Fenix Outdoor International AG [CH]",
            "└── ÄGARE: Familjen Nordin [SE]",
            "    └── VARUMÄRKE:",
            "        ├── Fjällräven [SE]",
            "        ├── Primus [SE] [Delvis]",
            "        ├── Tierra [SE] [Nej]",
            "        ├── Hanwag [DE]",
            "        └── Royal Robbins [US]",
        ]
    );
}

#[test]
fn test_owner_first_swaps_company_tiers() {
    let catalog = Catalog::bundled().unwrap();
    let lines = tree(&catalog, "Fjällräven", TierOrder::OwnerFirst);
    assert_eq!(lines[0], "ÄGARE: Familjen Nordin [SE]");
    assert_eq!(lines[1], "└── MODERBOLAG: Fenix Outdoor International AG [CH]");
}

#[test]
fn test_single_brand_is_independent() {
    let catalog = Catalog::bundled().unwrap();
    for name in ["Hästens", "Öresund Spirits"] {
        let brand = catalog.find_by_name(name).unwrap();
        assert_eq!(
            hierarchy::render_for(brand, TierOrder::default()),
            HierarchyView::Independent
        );
    }
}

#[test]
fn test_legacy_structure_is_plain_text() {
    let catalog = Catalog::bundled().unwrap();
    assert_eq!(
        tree(&catalog, "Björn Borg", TierOrder::default()),
        vec!["Björn Borg AB är noterat och äger varumärket globalt."]
    );
}

#[test]
fn test_csv_export_of_listing() {
    let catalog = Catalog::bundled().unwrap();
    let listing = Listing::new(
        TagQuery::with_tags(["skor"]),
        SortState::by(SortColumn::Name, SortDirection::Asc),
    );
    let mut buf = Vec::new();
    write_rows(&listing.rows(&catalog), OutputFormat::Csv, &mut buf).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "id,varumärke,kategori,tillverkadISverige\n20,Ecco,Skor,Nej\n21,Vagabond,Skor,Nej\n"
    );
}

#[test]
fn test_dataset_file_and_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("brands.json");

    fs::write(&path, THREE_BRANDS).unwrap();
    assert_eq!(Catalog::load(Some(path.as_path())).unwrap().len(), 3);

    fs::write(&path, THREE_BRANDS.replace("\"id\": 3", "\"id\": 1")).unwrap();
    assert!(matches!(Catalog::load(Some(path.as_path())), Err(CatalogError::DuplicateId(1))));

    let missing = dir.path().join("missing.json");
    assert!(matches!(Catalog::from_path(&missing), Err(CatalogError::Io { .. })));
}
