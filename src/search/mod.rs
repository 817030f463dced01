//! Search, filtering and sorting of the brand listing
//!
//! - [`query`]: committed tags and the live input of the search box
//! - [`filter`]: AND-combined substring matching over name, category and status
//! - [`sort`]: stable column sorting and the header-click cycle
//! - [`collate`]: Swedish alphabetical ordering
//!
//! [`Listing`] ties the pieces together the way the table consumes them:
//! filter first, then sort.

pub mod collate;
pub mod filter;
pub mod query;
pub mod sort;

pub use filter::Term;
pub use query::TagQuery;
pub use sort::{SortColumn, SortDirection, SortState};

use crate::catalog::{Brand, Catalog};

/// Search and sort state of one directory view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub query: TagQuery,
    pub sort: SortState,
}

impl Listing {
    #[must_use]
    pub fn new(query: TagQuery, sort: SortState) -> Self {
        Self { query, sort }
    }

    /// Rows to display: filtered by the query, then sorted
    #[must_use]
    pub fn rows<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Brand> {
        let filtered = filter::filter_query(catalog.brands(), &self.query);
        self.sort.apply(&filtered)
    }
}
