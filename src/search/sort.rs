//! Column sorting for the brand table
//!
//! Sorting is stable: rows that compare equal keep the order the filter
//! produced. Text columns use Swedish collation ([`super::collate`]); the status
//! column uses the fixed rank `Ja` < `Delvis` < `Nej`.
//!
//! Header clicks drive a three-step cycle per column, kept in [`SortState`]:
//!
//! ```text
//! (none) --click C--> (C, asc) --click C--> (C, desc) --click C--> (none)
//!    any state --click D (D != C)--> (D, asc)
//! ```

use super::collate;
use crate::catalog::Brand;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column the table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    /// Dataset order
    #[default]
    None,
    Name,
    Category,
    Status,
}

impl SortColumn {
    /// Sortable columns in table order
    pub const COLUMNS: [Self; 3] = [Self::Name, Self::Category, Self::Status];

    /// Header label as shown in the table
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Name => "Varumärke",
            Self::Category => "Kategori",
            Self::Status => "Tillverkad i Sverige",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Name => "name",
            Self::Category => "category",
            Self::Status => "status",
        };
        f.write_str(name)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    None,
    Asc,
    Desc,
}

impl SortDirection {
    /// Arrow shown next to a sorted header
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

/// Current sort column and direction of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    /// Unsorted (dataset order)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            column: SortColumn::None,
            direction: SortDirection::None,
        }
    }

    /// Start sorted by a column
    #[must_use]
    pub const fn by(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Advance the header-click cycle for `column`
    pub fn handle_sort(&mut self, column: SortColumn) {
        if column == SortColumn::None {
            *self = Self::new();
            return;
        }

        *self = if self.column == column {
            match self.direction {
                SortDirection::Asc => Self::by(column, SortDirection::Desc),
                SortDirection::Desc => Self::new(),
                SortDirection::None => Self::by(column, SortDirection::Asc),
            }
        } else {
            Self::by(column, SortDirection::Asc)
        };
        tracing::debug!(column = %self.column, direction = ?self.direction, "Sort changed");
    }

    /// Whether rows are in dataset order
    #[must_use]
    pub fn is_unsorted(&self) -> bool {
        self.column == SortColumn::None || self.direction == SortDirection::None
    }

    /// Direction to show on a given header, if it is the sorted column
    #[must_use]
    pub fn direction_for(&self, column: SortColumn) -> Option<SortDirection> {
        (!self.is_unsorted() && self.column == column).then_some(self.direction)
    }

    /// Sort rows according to this state
    #[must_use]
    pub fn apply<'a>(&self, brands: &[&'a Brand]) -> Vec<&'a Brand> {
        sort(brands, self.column, self.direction)
    }
}

/// Stable sort of filtered rows; the input slice is left untouched
///
/// `SortColumn::None` or `SortDirection::None` returns the input order.
#[must_use]
pub fn sort<'a>(
    brands: &[&'a Brand],
    column: SortColumn,
    direction: SortDirection,
) -> Vec<&'a Brand> {
    if column == SortColumn::None || direction == SortDirection::None {
        return brands.to_vec();
    }

    let mut keyed: Vec<(SortKey, &'a Brand)> = brands
        .iter()
        .map(|brand| (SortKey::new(brand, column), *brand))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = a.cmp(b);
        if direction == SortDirection::Desc {
            ordering.reverse()
        } else {
            ordering
        }
    });

    keyed.into_iter().map(|(_, brand)| brand).collect()
}

/// Precomputed comparison key for one row
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Text(Vec<u32>),
    Rank(u8),
    Unsorted,
}

impl SortKey {
    fn new(brand: &Brand, column: SortColumn) -> Self {
        match column {
            SortColumn::Name => Self::Text(collate::sort_key(&brand.name)),
            SortColumn::Category => Self::Text(collate::sort_key(&brand.category)),
            SortColumn::Status => Self::Rank(brand.manufacturing_status.rank()),
            SortColumn::None => Self::Unsorted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ManufacturingStatus::{self, No, Partial, Yes};
    use crate::testing::brand;

    fn names(rows: &[&Brand]) -> Vec<String> {
        rows.iter().map(|b| b.name.clone()).collect()
    }

    fn statuses(rows: &[&Brand]) -> Vec<ManufacturingStatus> {
        rows.iter().map(|b| b.manufacturing_status).collect()
    }

    #[test]
    fn test_unsorted_returns_input_order() {
        let brands = vec![brand(1, "Öl", "B", Yes), brand(2, "Arla", "A", No)];
        let rows: Vec<&Brand> = brands.iter().collect();

        assert_eq!(names(&sort(&rows, SortColumn::None, SortDirection::None)), ["Öl", "Arla"]);
        assert_eq!(names(&sort(&rows, SortColumn::Name, SortDirection::None)), ["Öl", "Arla"]);
    }

    #[test]
    fn test_name_sort_uses_swedish_order() {
        let brands = vec![
            brand(1, "Önos", "Mat", Yes),
            brand(2, "Zoégas", "Kaffe", No),
            brand(3, "Åbro", "Dryck", Yes),
            brand(4, "arla", "Mejeri", Yes),
        ];
        let rows: Vec<&Brand> = brands.iter().collect();

        let asc = sort(&rows, SortColumn::Name, SortDirection::Asc);
        assert_eq!(names(&asc), ["arla", "Zoégas", "Åbro", "Önos"]);

        let desc = sort(&rows, SortColumn::Name, SortDirection::Desc);
        assert_eq!(names(&desc), ["Önos", "Åbro", "Zoégas", "arla"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let brands = vec![
            brand(1, "Alfa", "Skor", Yes),
            brand(2, "ALFA", "Kläder", No),
            brand(3, "Beta", "Skor", Yes),
            brand(4, "alfa", "Mat", Partial),
        ];
        let rows: Vec<&Brand> = brands.iter().collect();

        let ids: Vec<u32> = sort(&rows, SortColumn::Name, SortDirection::Asc)
            .iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 4, 3]);

        let ids: Vec<u32> = sort(&rows, SortColumn::Name, SortDirection::Desc)
            .iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_status_sort_by_rank() {
        let brands = vec![brand(1, "A", "x", No), brand(2, "B", "x", Yes), brand(3, "C", "x", Partial)];
        let rows: Vec<&Brand> = brands.iter().collect();

        let asc = sort(&rows, SortColumn::Status, SortDirection::Asc);
        assert_eq!(statuses(&asc), vec![Yes, Partial, No]);

        let desc = sort(&rows, SortColumn::Status, SortDirection::Desc);
        assert_eq!(statuses(&desc), vec![No, Partial, Yes]);
    }

    #[test]
    fn test_category_sort() {
        let brands = vec![
            brand(1, "A", "Kläder", No),
            brand(2, "B", "Bilar", Yes),
            brand(3, "C", "Ägg", Partial),
        ];
        let rows: Vec<&Brand> = brands.iter().collect();

        let asc = sort(&rows, SortColumn::Category, SortDirection::Asc);
        assert_eq!(names(&asc), ["B", "A", "C"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let brands = vec![brand(1, "B", "x", No), brand(2, "A", "x", Yes)];
        let rows: Vec<&Brand> = brands.iter().collect();
        let _ = sort(&rows, SortColumn::Name, SortDirection::Asc);
        assert_eq!(names(&rows), ["B", "A"]);
    }

    #[test]
    fn test_tri_state_cycle() {
        let mut state = SortState::new();

        state.handle_sort(SortColumn::Name);
        assert_eq!(state, SortState::by(SortColumn::Name, SortDirection::Asc));

        state.handle_sort(SortColumn::Name);
        assert_eq!(state, SortState::by(SortColumn::Name, SortDirection::Desc));

        state.handle_sort(SortColumn::Name);
        assert_eq!(state, SortState::new());

        state.handle_sort(SortColumn::Name);
        assert_eq!(state, SortState::by(SortColumn::Name, SortDirection::Asc));
    }

    #[test]
    fn test_other_column_jumps_to_ascending() {
        let mut state = SortState::by(SortColumn::Name, SortDirection::Desc);
        state.handle_sort(SortColumn::Category);
        assert_eq!(state, SortState::by(SortColumn::Category, SortDirection::Asc));

        let mut state = SortState::by(SortColumn::Status, SortDirection::Asc);
        state.handle_sort(SortColumn::Name);
        assert_eq!(state, SortState::by(SortColumn::Name, SortDirection::Asc));
    }

    #[test]
    fn test_direction_for_header() {
        let state = SortState::by(SortColumn::Status, SortDirection::Desc);
        assert_eq!(state.direction_for(SortColumn::Status), Some(SortDirection::Desc));
        assert_eq!(state.direction_for(SortColumn::Name), None);
        assert_eq!(SortState::new().direction_for(SortColumn::Name), None);
    }

    #[test]
    fn test_apply_through_state() {
        let brands = vec![brand(1, "Beta", "x", No), brand(2, "Alfa", "x", Yes)];
        let rows: Vec<&Brand> = brands.iter().collect();
        let state = SortState::by(SortColumn::Name, SortDirection::Asc);
        assert_eq!(names(&state.apply(&rows)), ["Alfa", "Beta"]);

        let state = SortState::by(SortColumn::Status, SortDirection::Asc);
        assert_eq!(names(&state.apply(&rows)), ["Alfa", "Beta"]);
    }
}
