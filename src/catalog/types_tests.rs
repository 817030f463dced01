//! Unit tests for brand record types

use super::*;

#[test]
fn test_status_labels_and_ranks() {
    assert_eq!(ManufacturingStatus::Yes.label(), "Ja");
    assert_eq!(ManufacturingStatus::Partial.label(), "Delvis");
    assert_eq!(ManufacturingStatus::No.label(), "Nej");

    let ranks: Vec<u8> = ManufacturingStatus::ALL.iter().map(|s| s.rank()).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
    assert_eq!(ManufacturingStatus::Partial.to_string(), "Delvis");
}

#[test]
fn test_status_deserializes_from_swedish_label() {
    let status: ManufacturingStatus = serde_json::from_str("\"Delvis\"").unwrap();
    assert_eq!(status, ManufacturingStatus::Partial);

    let unknown = serde_json::from_str::<ManufacturingStatus>("\"Kanske\"");
    assert!(unknown.is_err());
}

#[test]
fn test_brand_deserializes_source_field_names() {
    let json = r#"{
        "id": 7,
        "varumärke": "Hästens",
        "kategori": "Sängar",
        "tillverkadISverige": "Ja",
        "merInfo": {
            "moderbolag": "Hästens Sängar AB",
            "ägare": "Jan Ryde",
            "börsnoterat": "Nej",
            "tillverkningsländer": ["Sverige"],
            "koncernstruktur": "Familjeägt sedan 1852",
            "intro": "Handgjorda sängar från Köping."
        }
    }"#;

    let brand: Brand = serde_json::from_str(json).unwrap();
    assert_eq!(brand.id, 7);
    assert_eq!(brand.name, "Hästens");
    assert_eq!(brand.category, "Sängar");
    assert_eq!(brand.manufacturing_status, ManufacturingStatus::Yes);
    assert_eq!(brand.details.owner, "Jan Ryde");
    assert_eq!(brand.details.manufacturing_countries, vec!["Sverige"]);
    assert_eq!(
        brand.details.structure,
        Structure::Legacy("Familjeägt sedan 1852".to_string())
    );
    assert_eq!(brand.details.intro.as_deref(), Some("Handgjorda sängar från Köping."));
}

#[test]
fn test_brand_without_details_uses_defaults() {
    let json = r#"{"id": 1, "varumärke": "X", "kategori": "Y", "tillverkadISverige": "Nej"}"#;
    let brand: Brand = serde_json::from_str(json).unwrap();

    assert!(brand.details.parent_company.is_empty());
    assert!(brand.details.manufacturing_countries.is_empty());
    assert_eq!(brand.details.structure, Structure::Legacy(String::new()));
    assert!(brand.details.intro.is_none());
}

#[test]
fn test_structure_node_deserializes() {
    let json = r#"{
        "moderbolag": "Fenix Outdoor International AG",
        "moderbolagLand": "CH",
        "varumärken": [
            {"namn": "Fjällräven", "land": "SE", "ärHuvudvarumärke": true, "status": "Nej"},
            {"namn": "Hanwag", "land": "DE", "ärHuvudvarumärke": false}
        ]
    }"#;

    let structure: Structure = serde_json::from_str(json).unwrap();
    let node = structure.as_node().unwrap();
    assert_eq!(node.parent_company(), Some("Fenix Outdoor International AG"));
    assert_eq!(node.parent_company_country(), Some("CH"));
    assert_eq!(node.owner(), None);
    assert_eq!(node.sibling_brands.len(), 2);
    assert_eq!(node.primary_brand().map(|b| b.name.as_str()), Some("Fjällräven"));
}

#[test]
fn test_malformed_structure_degrades_to_text() {
    let structure: Structure = serde_json::from_str("[1, 2, 3]").unwrap();
    assert_eq!(structure, Structure::Legacy("[1,2,3]".to_string()));

    let structure: Structure = serde_json::from_str(r#"{"varumärken": "inte en lista"}"#).unwrap();
    assert!(matches!(structure, Structure::Legacy(_)));

    let structure: Structure = serde_json::from_str("null").unwrap();
    assert_eq!(structure, Structure::default());
}

#[test]
fn test_empty_strings_count_as_absent() {
    let node = OwnershipNode {
        parent_company: Some(String::new()),
        owner: Some("  ".to_string()),
        ..OwnershipNode::default()
    };
    assert_eq!(node.parent_company(), None);
    assert_eq!(node.owner(), None);
}

#[test]
fn test_sibling_badge_rules() {
    let swedish = SiblingBrand {
        name: "Kosta Boda".to_string(),
        country: Some("SE".to_string()),
        is_primary: false,
        status: Some(ManufacturingStatus::Partial),
    };
    assert_eq!(swedish.badge(), Some(ManufacturingStatus::Partial));

    let german = SiblingBrand {
        country: Some("DE".to_string()),
        ..swedish.clone()
    };
    assert_eq!(german.badge(), None);

    let primary = SiblingBrand {
        is_primary: true,
        ..swedish.clone()
    };
    assert_eq!(primary.badge(), None);

    let no_status = SiblingBrand {
        status: None,
        ..swedish
    };
    assert_eq!(no_status.badge(), None);
}

#[test]
fn test_structure_serializes_untagged() {
    let legacy = Structure::Legacy("Ingen koncern".to_string());
    assert_eq!(serde_json::to_string(&legacy).unwrap(), "\"Ingen koncern\"");

    let node = Structure::Node(OwnershipNode {
        owner: Some("Geely".to_string()),
        ..OwnershipNode::default()
    });
    let json = serde_json::to_string(&node).unwrap();
    assert!(json.contains("\"ägare\":\"Geely\""));
    assert!(json.contains("\"varumärken\":[]"));
}
