//! Sortable brand table with expandable rows

use crate::catalog::Brand;
use crate::flag::FlagStyle;
use crate::hierarchy::{self, TierOrder};
use crate::output::{self, TreeLine};
use crate::search::SortColumn;
use crate::ui::ratatui_adapter::state::{HitMap, HomeState};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, StatefulWidget, Widget},
};
use std::marker::PhantomData;

const STATUS_WIDTH: u16 = 24;
const DETAIL_INDENT: &str = "    ";
const NO_MATCHES: &str = "Inga varumärken matchar sökningen";

/// Table of the filtered rows; expanded rows show details and ownership
///
/// `'c` is the lifetime of the catalog the rows borrow from.
pub struct BrandTable<'t, 'c> {
    theme: &'t Theme,
    tier_order: TierOrder,
    flag_style: FlagStyle,
    rows: PhantomData<&'c Brand>,
}

impl<'t> BrandTable<'t, '_> {
    #[must_use]
    pub const fn new(theme: &'t Theme, tier_order: TierOrder, flag_style: FlagStyle) -> Self {
        Self {
            theme,
            tier_order,
            flag_style,
            rows: PhantomData,
        }
    }

    /// Marker, name, category and status cells of one line
    fn columns(area: Rect) -> [Rect; 4] {
        Layout::horizontal([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(STATUS_WIDTH),
        ])
        .areas(area)
    }

    /// Lines drawn below an expanded row
    fn detail_lines(&self, brand: &Brand) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if let Some(intro) = brand.details.intro.as_deref().filter(|s| !s.trim().is_empty()) {
            lines.push(Line::styled(format!("{DETAIL_INDENT}{intro}"), self.theme.dimmed_style()));
        }

        for (label, value) in output::detail_fields(brand) {
            lines.push(Line::from(vec![
                Span::styled(format!("{DETAIL_INDENT}{label}: "), self.theme.heading_style()),
                Span::raw(value),
            ]));
        }

        let view = hierarchy::render_for(brand, self.tier_order);
        let tree = output::tree_lines(&view, self.flag_style);
        if !tree.is_empty() {
            lines.push(Line::styled(
                format!("{DETAIL_INDENT}Koncernstruktur:"),
                self.theme.heading_style(),
            ));
            lines.extend(tree.iter().map(|line| self.tree_line(line)));
        }
        lines
    }

    fn tree_line(&self, line: &TreeLine) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!("{DETAIL_INDENT}{DETAIL_INDENT}{}", line.prefix),
            self.theme.dimmed_style(),
        )];
        if let Some(label) = line.label {
            spans.push(Span::styled(format!("{label}:"), self.theme.dimmed_style()));
            if !line.name.is_empty() {
                spans.push(Span::raw(" "));
            }
        }
        let name_style = if line.is_primary {
            self.theme.primary_style()
        } else {
            self.theme.normal_style()
        };
        spans.push(Span::styled(line.name.clone(), name_style));
        if let Some(flag) = &line.flag {
            spans.push(Span::raw(format!(" {flag}")));
        }
        if let Some(badge) = line.badge {
            spans.push(Span::styled(format!(" [{badge}]"), self.theme.status_style(badge)));
        }
        Line::from(spans)
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer, state: &HomeState<'_>, hits: &mut HitMap) {
        let [_, name, category, status] = Self::columns(area);
        let mut targets = Vec::with_capacity(SortColumn::COLUMNS.len());

        for (rect, column) in [name, category, status].into_iter().zip(SortColumn::COLUMNS) {
            let label = output::header_label(column, &state.listing.sort);
            buf.set_stringn(rect.x, rect.y, label, rect.width as usize, self.theme.heading_style());
            targets.push((rect.x, rect.x + rect.width, column));
        }
        hits.header = Some((area.y, targets));
    }

    fn render_row(&self, area: Rect, buf: &mut Buffer, brand: &Brand, selected: bool) {
        let [marker, name, category, status] = Self::columns(area);
        let base = if selected {
            buf.set_style(area, self.theme.selected_style());
            buf.set_string(marker.x, marker.y, ">", self.theme.cursor_style());
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        buf.set_stringn(name.x, name.y, &brand.name, name.width.saturating_sub(1) as usize, base);
        buf.set_stringn(
            category.x,
            category.y,
            &brand.category,
            category.width.saturating_sub(1) as usize,
            base,
        );
        let badge = format!("● {}", brand.manufacturing_status.label());
        buf.set_stringn(
            status.x,
            status.y,
            badge,
            status.width as usize,
            self.theme.status_style(brand.manufacturing_status),
        );
    }
}

impl<'c> StatefulWidget for BrandTable<'_, 'c> {
    type State = HomeState<'c>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Varumärken ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut hits = HitMap::default();
        if inner.height == 0 {
            state.hits = hits;
            return;
        }

        self.render_header(Rect { height: 1, ..inner }, buf, state, &mut hits);
        let body_height = inner.height.saturating_sub(1) as usize;
        state.visible_height = body_height;

        if state.rows.is_empty() {
            if body_height > 0 {
                buf.set_stringn(inner.x + 2, inner.y + 1, NO_MATCHES, inner.width as usize, self.theme.dimmed_style());
            }
            state.hits = hits;
            return;
        }

        let details: Vec<Vec<Line<'static>>> = state
            .rows
            .iter()
            .map(|brand| {
                if state.is_expanded(brand.id) {
                    self.detail_lines(brand)
                } else {
                    Vec::new()
                }
            })
            .collect();
        let heights: Vec<usize> = details.iter().map(|d| d.len() + 1).collect();
        state.fit_cursor(&heights, body_height);

        let bottom = inner.y + inner.height;
        let mut y = inner.y + 1;
        for (index, brand) in state.rows.iter().enumerate().skip(state.scroll_offset) {
            if y >= bottom {
                break;
            }
            let line_area = Rect { y, height: 1, ..inner };
            self.render_row(line_area, buf, brand, index == state.cursor);
            hits.rows.push((y, index));
            y += 1;

            for line in &details[index] {
                if y >= bottom {
                    break;
                }
                buf.set_line(inner.x, y, line, inner.width);
                y += 1;
            }
        }

        state.hits = hits;
    }
}
