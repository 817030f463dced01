//! Brand records and the ownership structure attached to them
//!
//! The dataset uses the Swedish field names of the published register
//! (`varumärke`, `kategori`, `merInfo`, ...). The Rust types use English names and
//! map onto the source fields with serde renames, so the JSON stays the single
//! source of truth.
//!
//! # Types
//!
//! - **`Brand`**: One row of the register
//! - **`ManufacturingStatus`**: `Ja` / `Delvis` / `Nej`
//! - **`BrandDetails`**: The expanded "mer info" block
//! - **`Structure`**: Either a legacy free-text description or an `OwnershipNode`
//! - **`OwnershipNode`** / **`SiblingBrand`**: Owner, parent company and group brands

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Country code of the reference country for manufacturing status
pub const REFERENCE_COUNTRY: &str = "SE";

/// Whether a brand's goods are manufactured in Sweden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManufacturingStatus {
    /// Manufactured mainly in Sweden
    #[serde(rename = "Ja")]
    Yes,
    /// Some product lines or components made in Sweden
    #[serde(rename = "Delvis")]
    Partial,
    /// Manufactured mainly abroad
    #[serde(rename = "Nej")]
    No,
}

impl ManufacturingStatus {
    /// All statuses in rank order
    pub const ALL: [Self; 3] = [Self::Yes, Self::Partial, Self::No];

    /// Swedish display label, also the text matched by search
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Ja",
            Self::Partial => "Delvis",
            Self::No => "Nej",
        }
    }

    /// Sort rank: `Yes` < `Partial` < `No`
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Yes => 1,
            Self::Partial => 2,
            Self::No => 3,
        }
    }
}

impl fmt::Display for ManufacturingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the brand register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Stable identity within a session (row key)
    pub id: u32,
    #[serde(rename = "varumärke")]
    pub name: String,
    #[serde(rename = "kategori")]
    pub category: String,
    #[serde(rename = "tillverkadISverige")]
    pub manufacturing_status: ManufacturingStatus,
    #[serde(rename = "merInfo", default)]
    pub details: BrandDetails,
}

/// Expanded information shown when a row is opened
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandDetails {
    #[serde(rename = "moderbolag", default)]
    pub parent_company: String,
    #[serde(rename = "ägare", default)]
    pub owner: String,
    /// Free text about stock listing (e.g. "Ja, Nasdaq Stockholm")
    #[serde(rename = "börsnoterat", default)]
    pub publicly_traded: String,
    #[serde(rename = "tillverkningsländer", default)]
    pub manufacturing_countries: Vec<String>,
    #[serde(rename = "koncernstruktur", default)]
    pub structure: Structure,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
}

/// Corporate structure around a brand
///
/// Older records describe the group as prose; newer records carry a structured
/// node. Anything that is neither a string nor a well-formed node is kept as
/// legacy text (its raw JSON) instead of failing the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Structure {
    /// Free-text description, rendered as-is
    Legacy(String),
    /// Structured owner / parent company / sibling brands
    Node(OwnershipNode),
}

impl Default for Structure {
    fn default() -> Self {
        Self::Legacy(String::new())
    }
}

impl Structure {
    /// Classify a raw JSON value
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::default(),
            Value::String(text) => Self::Legacy(text),
            other => match serde_json::from_value::<OwnershipNode>(other.clone()) {
                Ok(node) => Self::Node(node),
                Err(e) => {
                    tracing::debug!("Keeping malformed koncernstruktur as text: {e}");
                    Self::Legacy(other.to_string())
                }
            },
        }
    }

    /// Structured node, if this is not a legacy description
    #[must_use]
    pub const fn as_node(&self) -> Option<&OwnershipNode> {
        match self {
            Self::Node(node) => Some(node),
            Self::Legacy(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for Structure {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// Owner, parent company and sibling brands of one brand
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipNode {
    #[serde(rename = "moderbolag", default, skip_serializing_if = "Option::is_none")]
    pub parent_company: Option<String>,
    /// ISO 3166-1 alpha-2
    #[serde(rename = "moderbolagLand", default, skip_serializing_if = "Option::is_none")]
    pub parent_company_country: Option<String>,
    #[serde(rename = "ägare", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// ISO 3166-1 alpha-2
    #[serde(rename = "ägareLand", default, skip_serializing_if = "Option::is_none")]
    pub owner_country: Option<String>,
    #[serde(rename = "varumärken", default)]
    pub sibling_brands: Vec<SiblingBrand>,
}

impl OwnershipNode {
    /// Parent company name, treating an empty string as absent
    #[must_use]
    pub fn parent_company(&self) -> Option<&str> {
        non_empty(self.parent_company.as_deref())
    }

    #[must_use]
    pub fn parent_company_country(&self) -> Option<&str> {
        non_empty(self.parent_company_country.as_deref())
    }

    /// Owner name, treating an empty string as absent
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        non_empty(self.owner.as_deref())
    }

    #[must_use]
    pub fn owner_country(&self) -> Option<&str> {
        non_empty(self.owner_country.as_deref())
    }

    /// The sibling entry representing the brand itself
    #[must_use]
    pub fn primary_brand(&self) -> Option<&SiblingBrand> {
        self.sibling_brands.iter().find(|b| b.is_primary)
    }
}

/// A brand in the same group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiblingBrand {
    #[serde(rename = "namn")]
    pub name: String,
    /// ISO 3166-1 alpha-2
    #[serde(rename = "land", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "ärHuvudvarumärke", default)]
    pub is_primary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ManufacturingStatus>,
}

impl SiblingBrand {
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        non_empty(self.country.as_deref())
    }

    /// Status to badge next to this sibling in a hierarchy listing
    ///
    /// Only Swedish siblings other than the brand being displayed get one; the
    /// primary brand's status is already shown on its own row.
    #[must_use]
    pub fn badge(&self) -> Option<ManufacturingStatus> {
        if self.is_primary || self.country() != Some(REFERENCE_COUNTRY) {
            return None;
        }
        self.status
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
