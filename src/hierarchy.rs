//! Ownership hierarchy of a brand
//!
//! Turns a brand's `koncernstruktur` into a positional description: a list of
//! tiers from top to bottom. Company tiers (parent company, owner) come first in
//! the configured order, followed by the tier listing the group's brands.
//! Absent tiers are skipped, so the first present tier is always the top.
//!
//! ```text
//! MODERBOLAG  New Wave Group AB  🇸🇪
//!   └─ ÄGARE  Torsten Jansson    🇸🇪
//!        └─ VARUMÄRKE  Orrefors* · Kosta Boda ● · Craft
//! ```
//!
//! Legacy text structures produce [`HierarchyView::Flat`]; a group consisting of
//! only the brand itself with no owner or parent produces
//! [`HierarchyView::Independent`].

use crate::catalog::{Brand, ManufacturingStatus, OwnershipNode, Structure};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown instead of a tree for single-brand companies
pub const INDEPENDENT_LABEL: &str = "Oberoende svenskt företag";

/// Vertical order of the company tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TierOrder {
    /// Parent company above owner
    #[default]
    ParentFirst,
    /// Owner above parent company (earlier layout)
    OwnerFirst,
}

impl fmt::Display for TierOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParentFirst => f.write_str("parent-first"),
            Self::OwnerFirst => f.write_str("owner-first"),
        }
    }
}

impl std::str::FromStr for TierOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parent-first" => Ok(Self::ParentFirst),
            "owner-first" => Ok(Self::OwnerFirst),
            other => Err(format!(
                "Invalid tier order '{other}'. Use 'parent-first' or 'owner-first'"
            )),
        }
    }
}

/// Role of a company tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyRole {
    ParentCompany,
    Owner,
}

impl CompanyRole {
    /// Tier label as printed above the node
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ParentCompany => "MODERBOLAG",
            Self::Owner => "ÄGARE",
        }
    }
}

/// Label of the brand tier
pub const BRANDS_LABEL: &str = "VARUMÄRKE";

/// One entry of the brand tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandEntry<'a> {
    pub name: &'a str,
    pub country: Option<&'a str>,
    /// The brand being displayed; rendered with emphasis
    pub is_primary: bool,
    /// Compact status indicator, only for Swedish non-primary siblings
    pub badge: Option<ManufacturingStatus>,
}

/// One level of the tree, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tier<'a> {
    Company {
        role: CompanyRole,
        name: &'a str,
        country: Option<&'a str>,
    },
    Brands(Vec<BrandEntry<'a>>),
}

impl Tier<'_> {
    /// Label printed for this tier
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Company { role, .. } => role.label(),
            Self::Brands(_) => BRANDS_LABEL,
        }
    }
}

/// What to draw for a brand's structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HierarchyView<'a> {
    /// Legacy free text, no tree
    Flat(&'a str),
    /// Single-brand company with no owner or parent
    Independent,
    /// Tiers from top to bottom
    Tree(Vec<Tier<'a>>),
}

impl HierarchyView<'_> {
    /// Number of tiers drawn (0 for flat text and the independent message)
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Tree(tiers) => tiers.len(),
            Self::Flat(_) | Self::Independent => 0,
        }
    }
}

/// Describe a structure field
#[must_use]
pub fn render(structure: &Structure, order: TierOrder) -> HierarchyView<'_> {
    match structure {
        Structure::Legacy(text) => HierarchyView::Flat(text),
        Structure::Node(node) => render_node(node, order, None),
    }
}

/// Describe the structure of a brand
///
/// If the data marks no sibling as primary, the sibling carrying the brand's own
/// name is treated as primary.
#[must_use]
pub fn render_for(brand: &Brand, order: TierOrder) -> HierarchyView<'_> {
    match &brand.details.structure {
        Structure::Legacy(text) => HierarchyView::Flat(text),
        Structure::Node(node) => render_node(node, order, Some(&brand.name)),
    }
}

fn render_node<'a>(
    node: &'a OwnershipNode,
    order: TierOrder,
    own_name: Option<&str>,
) -> HierarchyView<'a> {
    let parent = node.parent_company();
    let owner = node.owner();

    if node.sibling_brands.len() == 1 && parent.is_none() && owner.is_none() {
        return HierarchyView::Independent;
    }

    let parent_tier = parent.map(|name| Tier::Company {
        role: CompanyRole::ParentCompany,
        name,
        country: node.parent_company_country(),
    });
    let owner_tier = owner.map(|name| Tier::Company {
        role: CompanyRole::Owner,
        name,
        country: node.owner_country(),
    });

    let (first, second) = match order {
        TierOrder::ParentFirst => (parent_tier, owner_tier),
        TierOrder::OwnerFirst => (owner_tier, parent_tier),
    };

    let mut tiers: Vec<Tier<'a>> = first.into_iter().chain(second).collect();
    if !node.sibling_brands.is_empty() {
        tiers.push(Tier::Brands(brand_entries(node, own_name)));
    }
    HierarchyView::Tree(tiers)
}

/// Brand tier entries
///
/// The inferred primary only gains emphasis; its badge follows the data.
fn brand_entries<'a>(node: &'a OwnershipNode, own_name: Option<&str>) -> Vec<BrandEntry<'a>> {
    let fallback = own_name
        .filter(|_| node.primary_brand().is_none())
        .map(str::to_lowercase);

    node.sibling_brands
        .iter()
        .map(|sibling| {
            let inferred = fallback
                .as_deref()
                .is_some_and(|own| sibling.name.to_lowercase() == own);
            BrandEntry {
                name: &sibling.name,
                country: sibling.country(),
                is_primary: sibling.is_primary || inferred,
                badge: sibling.badge(),
            }
        })
        .collect()
}
