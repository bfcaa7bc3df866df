//! Table view state.
//!
//! Column visibility, pagination and row selection are plain values the
//! caller owns and passes down; none of them touch calculation.

use crate::stat_kind::StatKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Page sizes offered by the table.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 50, 100];

/// Pages shown on each side of the current page in `page_range`.
const PAGE_WINDOW: usize = 2;

/// A toggleable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    MarkNo,
    Name,
    Stat(StatKind),
    Total,
    Series,
    Enhanced,
}

impl Column {
    pub fn label(&self) -> &'static str {
        match self {
            Column::MarkNo => "Mark No",
            Column::Name => "Name",
            Column::Stat(kind) => kind.label(),
            Column::Total => "Total",
            Column::Series => "Series",
            Column::Enhanced => "Enhanced",
        }
    }
}

/// Which optional columns are shown.
///
/// # Examples
///
/// ```rust
/// use petstat::{Column, ColumnVisibility, StatKind};
///
/// let mut columns = ColumnVisibility::default();
/// assert_eq!(columns.visible_stats(), vec![StatKind::Speed]);
///
/// columns.set(Column::Stat(StatKind::Speed), false);
/// assert!(!columns.shows_enhanced());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnVisibility {
    pub mark_no: bool,
    pub name: bool,
    stats: [bool; 6],
    pub total: bool,
    pub series: bool,
    pub enhanced: bool,
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        let mut stats = [false; 6];
        stats[StatKind::Speed.index()] = true;
        Self {
            mark_no: true,
            name: true,
            stats,
            total: false,
            series: true,
            enhanced: true,
        }
    }
}

impl ColumnVisibility {
    /// Every optional column in display order.
    pub fn columns() -> Vec<Column> {
        let mut columns = vec![Column::MarkNo, Column::Name];
        columns.extend(StatKind::ALL.into_iter().map(Column::Stat));
        columns.extend([Column::Total, Column::Series, Column::Enhanced]);
        columns
    }

    pub fn is_visible(&self, column: Column) -> bool {
        match column {
            Column::MarkNo => self.mark_no,
            Column::Name => self.name,
            Column::Stat(kind) => self.stats[kind.index()],
            Column::Total => self.total,
            Column::Series => self.series,
            Column::Enhanced => self.enhanced,
        }
    }

    pub fn set(&mut self, column: Column, visible: bool) {
        match column {
            Column::MarkNo => self.mark_no = visible,
            Column::Name => self.name = visible,
            Column::Stat(kind) => self.stats[kind.index()] = visible,
            Column::Total => self.total = visible,
            Column::Series => self.series = visible,
            Column::Enhanced => self.enhanced = visible,
        }
    }

    /// Visible stat columns in display order.
    pub fn visible_stats(&self) -> Vec<StatKind> {
        StatKind::ALL
            .into_iter()
            .filter(|kind| self.stats[kind.index()])
            .collect()
    }

    /// The enhanced column only appears when at least one stat is visible.
    pub fn shows_enhanced(&self) -> bool {
        self.enhanced && self.stats.iter().any(|v| *v)
    }
}

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: PAGE_SIZE_OPTIONS[0],
        }
    }
}

impl Pagination {
    /// Number of pages for `total_rows`, at least 1.
    pub fn page_count(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size.max(1)).max(1)
    }

    /// Row range `[start, end)` of the current page.
    pub fn page_bounds(&self, total_rows: usize) -> (usize, usize) {
        let start = self.page_index.saturating_mul(self.page_size).min(total_rows);
        let end = start.saturating_add(self.page_size).min(total_rows);
        (start, end)
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, total_rows: usize) -> bool {
        self.page_index.saturating_add(1) < self.page_count(total_rows)
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next_page(&mut self, total_rows: usize) {
        if self.can_next(total_rows) {
            self.page_index += 1;
        }
    }

    /// Jump to a page, clamped to the last page.
    pub fn set_page_index(&mut self, index: usize, total_rows: usize) {
        self.page_index = index.min(self.page_count(total_rows) - 1);
    }

    /// Change the page size and return to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page_index = 0;
    }
}

/// An entry in a pager control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Zero-based page index.
    Page(usize),
    Ellipsis,
}

/// Pager entries for `total_pages` with `current` highlighted.
///
/// The first and last pages and the pages within two of `current` are
/// shown. A gap of exactly one page is filled in; larger gaps collapse
/// into an ellipsis.
///
/// # Examples
///
/// ```rust
/// use petstat::view::{page_range, PageItem::{Ellipsis, Page}};
///
/// assert_eq!(
///     page_range(5, 12),
///     vec![Page(0), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(11)]
/// );
/// ```
pub fn page_range(current: usize, total_pages: usize) -> Vec<PageItem> {
    let shown = (0..total_pages).filter(|&i| {
        i == 0 || i + 1 == total_pages || i.abs_diff(current) <= PAGE_WINDOW
    });

    let mut items = Vec::new();
    let mut prev: Option<usize> = None;
    for i in shown {
        if let Some(p) = prev {
            match i - p {
                1 => {}
                2 => items.push(PageItem::Page(p + 1)),
                _ => items.push(PageItem::Ellipsis),
            }
        }
        items.push(PageItem::Page(i));
        prev = Some(i);
    }
    items
}

/// Selected rows by pet id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSelection(BTreeSet<String>);

impl RowSelection {
    pub fn toggle(&mut self, id: &str, selected: bool) {
        if selected {
            self.0.insert(id.to_string());
        } else {
            self.0.remove(id);
        }
    }

    pub fn select_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.0.extend(ids.into_iter().map(str::to_string));
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageItem::{Ellipsis, Page};

    #[test]
    fn test_default_visibility() {
        let columns = ColumnVisibility::default();
        assert!(columns.is_visible(Column::MarkNo));
        assert!(columns.is_visible(Column::Stat(StatKind::Speed)));
        assert!(!columns.is_visible(Column::Stat(StatKind::Vitality)));
        assert!(!columns.is_visible(Column::Total));
        assert!(columns.shows_enhanced());
        assert_eq!(ColumnVisibility::columns().len(), 11);
    }

    #[test]
    fn test_visible_stats_order() {
        let mut columns = ColumnVisibility::default();
        columns.set(Column::Stat(StatKind::Vitality), true);
        columns.set(Column::Stat(StatKind::SpecialAttack), true);
        assert_eq!(
            columns.visible_stats(),
            vec![StatKind::Vitality, StatKind::SpecialAttack, StatKind::Speed]
        );
        columns.set(Column::Enhanced, false);
        assert!(!columns.shows_enhanced());
    }

    #[test]
    fn test_pagination_bounds() {
        let mut pages = Pagination::default();
        assert_eq!(pages.page_count(0), 1);
        assert_eq!(pages.page_count(25), 3);
        pages.set_page_index(9, 25);
        assert_eq!(pages.page_index, 2);
        assert_eq!(pages.page_bounds(25), (20, 25));
        assert!(!pages.can_next(25));
        pages.next_page(25);
        assert_eq!(pages.page_index, 2);
        pages.previous_page();
        assert!(pages.can_previous());
        pages.set_page_size(50);
        assert_eq!(pages.page_index, 0);
        assert_eq!(pages.page_bounds(25), (0, 25));
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let pages: Pagination =
            serde_json::from_str(r#"{"page_index": 18446744073709551615, "page_size": 10}"#).unwrap();
        assert_eq!(pages.page_index, usize::MAX);
        assert_eq!(pages.page_bounds(5), (5, 5));
        assert!(!pages.can_next(5));

        let huge = Pagination {
            page_index: 3,
            page_size: usize::MAX,
        };
        assert_eq!(huge.page_bounds(7), (7, 7));
    }

    #[test]
    fn test_page_range_small() {
        assert_eq!(page_range(0, 1), vec![Page(0)]);
        assert_eq!(page_range(0, 3), vec![Page(0), Page(1), Page(2)]);
        assert!(page_range(0, 0).is_empty());
    }

    #[test]
    fn test_page_range_fills_single_gap() {
        // current 4 shows 2..=6; the gap at page 1 is filled
        assert_eq!(
            page_range(4, 8),
            vec![Page(0), Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
    }

    #[test]
    fn test_page_range_edges() {
        assert_eq!(
            page_range(0, 10),
            vec![Page(0), Page(1), Page(2), Ellipsis, Page(9)]
        );
        assert_eq!(
            page_range(9, 10),
            vec![Page(0), Ellipsis, Page(7), Page(8), Page(9)]
        );
    }

    #[test]
    fn test_row_selection() {
        let mut selection = RowSelection::default();
        selection.select_all(["a", "b"]);
        selection.toggle("c", true);
        selection.toggle("a", false);
        assert_eq!(selection.len(), 2);
        assert!(selection.contains("b"));
        selection.clear();
        assert!(selection.is_empty());
    }
}
