//! Ratatui widgets for the brand browser
//!
//! Custom widgets for rendering the directory and about pages.

mod about_view;
mod brand_table;
mod footer;
mod help_bar;
mod help_overlay;
mod search_bar;
mod status_bar;

pub use about_view::AboutView;
pub use brand_table::BrandTable;
pub use footer::Footer;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;

/// Rendered buffer as one trimmed string per line
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut line = String::new();
            for x in area.left()..area.right() {
                line.push_str(buf[(x, y)].symbol());
            }
            line.trim_end().to_string()
        })
        .collect()
}
