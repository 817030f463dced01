//! Output formatting for CLI display
//!
//! This module turns brands into terminal text: the listing table, CSV and
//! JSON exports, the detail view and the ownership tree. Functions here return
//! plain strings; colour is applied only by the `print_*` helpers.

use crate::catalog::{Brand, ManufacturingStatus};
use crate::flag::{self, FlagStyle};
use crate::hierarchy::{self, HierarchyView, Tier, TierOrder};
use crate::search::{SortColumn, SortState};
use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::io::Write;

const COLUMN_GAP: &str = "  ";
const EMPTY_FIELD: &str = "-";

/// Colour a status label the way badges are shown
#[must_use]
pub fn status_badge(status: ManufacturingStatus) -> ColoredString {
    match status {
        ManufacturingStatus::Yes => status.label().green(),
        ManufacturingStatus::Partial => status.label().yellow(),
        ManufacturingStatus::No => status.label().red(),
    }
}

/// Column header with the sort arrow when it is the sorted column
#[must_use]
pub fn header_label(column: SortColumn, sort: &SortState) -> String {
    match sort.direction_for(column) {
        Some(direction) => format!("{} {}", column.header(), direction.arrow()),
        None => column.header().to_string(),
    }
}

/// Listing table as plain lines: header, rule, one line per brand
#[must_use]
pub fn table_lines(rows: &[&Brand], sort: &SortState) -> Vec<String> {
    let headers: Vec<String> = SortColumn::COLUMNS
        .iter()
        .map(|c| header_label(*c, sort))
        .collect();

    let cells: Vec<[&str; 3]> = rows
        .iter()
        .map(|b| [b.name.as_str(), b.category.as_str(), b.manufacturing_status.label()])
        .collect();

    let mut widths = [0usize; 3];
    for (i, header) in headers.iter().enumerate() {
        widths[i] = header.chars().count();
    }
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let format_row = |values: [&str; 3]| -> String {
        let line = format!(
            "{:<w0$}{COLUMN_GAP}{:<w1$}{COLUMN_GAP}{}",
            values[0],
            values[1],
            values[2],
            w0 = widths[0],
            w1 = widths[1],
        );
        line.trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row([&headers[0], &headers[1], &headers[2]]));
    lines.push("-".repeat(widths.iter().sum::<usize>() + COLUMN_GAP.len() * 2));
    lines.extend(cells.into_iter().map(format_row));
    lines
}

/// Print the listing table, colouring the status column
pub fn print_table(rows: &[&Brand], sort: &SortState, quiet: bool) {
    if quiet {
        for brand in rows {
            println!("{}", brand.name);
        }
        return;
    }

    let lines = table_lines(rows, sort);
    for (i, line) in lines.iter().enumerate() {
        match i {
            0 => println!("{}", line.bold()),
            1 => println!("{}", line.dimmed()),
            _ => {
                let status = rows[i - 2].manufacturing_status;
                match line.strip_suffix(status.label()) {
                    Some(rest) => println!("{rest}{}", status_badge(status)),
                    None => println!("{line}"),
                }
            }
        }
    }
}

#[derive(Serialize)]
struct CsvRecord<'a> {
    id: u32,
    #[serde(rename = "varumärke")]
    name: &'a str,
    #[serde(rename = "kategori")]
    category: &'a str,
    #[serde(rename = "tillverkadISverige")]
    status: &'a str,
}

/// Write rows as CSV with the dataset's field names
///
/// # Errors
///
/// Returns `csv::Error` if writing fails.
pub fn write_csv<W: Write>(rows: &[&Brand], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for brand in rows {
        csv_writer.serialize(CsvRecord {
            id: brand.id,
            name: &brand.name,
            category: &brand.category,
            status: brand.manufacturing_status.label(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write full brand records as pretty JSON
///
/// # Errors
///
/// Returns `serde_json::Error` if writing fails.
pub fn write_json<W: Write>(rows: &[&Brand], mut writer: W) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writeln!(writer).map_err(serde_json::Error::io)
}

/// Labelled fields of the expanded detail view
#[must_use]
pub fn detail_fields(brand: &Brand) -> Vec<(&'static str, String)> {
    let details = &brand.details;
    let or_empty = |value: &str| {
        if value.trim().is_empty() {
            EMPTY_FIELD.to_string()
        } else {
            value.to_string()
        }
    };

    vec![
        ("Moderbolag", or_empty(&details.parent_company)),
        ("Ägare", or_empty(&details.owner)),
        ("Börsnoterat", or_empty(&details.publicly_traded)),
        ("Tillverkningsländer", or_empty(&details.manufacturing_countries.join(", "))),
    ]
}

/// One printed line of an ownership tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    /// Indentation and connector
    pub prefix: String,
    pub label: Option<&'static str>,
    pub name: String,
    pub flag: Option<String>,
    pub is_primary: bool,
    pub badge: Option<ManufacturingStatus>,
}

impl TreeLine {
    fn text(prefix: String, name: &str) -> Self {
        Self {
            prefix,
            label: None,
            name: name.to_string(),
            flag: None,
            is_primary: false,
            badge: None,
        }
    }

    /// Plain rendering of the line
    #[must_use]
    pub fn plain(&self) -> String {
        let mut out = self.prefix.clone();
        if let Some(label) = self.label {
            out.push_str(label);
            out.push(':');
            if !self.name.is_empty() {
                out.push(' ');
            }
        }
        out.push_str(&self.name);
        if let Some(flag) = &self.flag {
            out.push(' ');
            out.push_str(flag);
        }
        if let Some(badge) = self.badge {
            out.push_str(&format!(" [{badge}]"));
        }
        out
    }
}

/// Lay out a hierarchy view as indented lines
///
/// Each tier sits one level below the previous one; the brands of the last
/// tier are listed with `├──` / `└──` connectors.
#[must_use]
pub fn tree_lines(view: &HierarchyView<'_>, style: FlagStyle) -> Vec<TreeLine> {
    let tiers = match view {
        HierarchyView::Flat(text) if text.trim().is_empty() => return Vec::new(),
        HierarchyView::Flat(text) => return vec![TreeLine::text(String::new(), text)],
        HierarchyView::Independent => {
            return vec![TreeLine::text(String::new(), hierarchy::INDEPENDENT_LABEL)];
        }
        HierarchyView::Tree(tiers) => tiers,
    };

    let flag_of = |code: Option<&str>| code.map(|c| flag::indicator(c, style));
    let mut lines = Vec::new();

    for (depth, tier) in tiers.iter().enumerate() {
        let prefix = if depth == 0 {
            String::new()
        } else {
            format!("{}└── ", "    ".repeat(depth - 1))
        };

        match tier {
            Tier::Company { name, country, .. } => lines.push(TreeLine {
                prefix,
                label: Some(tier.label()),
                name: (*name).to_string(),
                flag: flag_of(*country),
                is_primary: false,
                badge: None,
            }),
            Tier::Brands(entries) => {
                lines.push(TreeLine {
                    label: Some(tier.label()),
                    ..TreeLine::text(prefix, "")
                });
                let indent = "    ".repeat(depth);
                for (i, entry) in entries.iter().enumerate() {
                    let connector = if i + 1 == entries.len() { "└── " } else { "├── " };
                    lines.push(TreeLine {
                        prefix: format!("{indent}{connector}"),
                        label: None,
                        name: entry.name.to_string(),
                        flag: flag_of(entry.country),
                        is_primary: entry.is_primary,
                        badge: entry.badge,
                    });
                }
            }
        }
    }
    lines
}

/// Print a brand's detail view
pub fn print_details(brand: &Brand, order: TierOrder, style: FlagStyle) {
    println!(
        "{} {} {}",
        brand.name.bold(),
        format!("({})", brand.category).dimmed(),
        status_badge(brand.manufacturing_status)
    );
    if let Some(intro) = &brand.details.intro {
        println!("{intro}");
    }
    println!();

    for (label, value) in detail_fields(brand) {
        println!("{:<20}{value}", format!("{label}:").bold());
    }

    let lines = tree_lines(&hierarchy::render_for(brand, order), style);
    if !lines.is_empty() {
        println!();
        println!("{}", "Koncernstruktur:".bold());
        for line in lines {
            if line.is_primary {
                println!("  {}{}", line.prefix, line.plain()[line.prefix.len()..].bold());
            } else {
                println!("  {}", line.plain());
            }
        }
    }
}
