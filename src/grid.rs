//! Grid Presentation model
//!
//! Column schema, sort, per-column text filters and pagination for the
//! resource table. The grid keeps indices into the collection it was last
//! refreshed with; visibility is only recomputed by [`GridState::refresh`].

use crate::filter::{passes_filter, FilterState};
use crate::model::{Resource, Tag};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::ops::Range;

/// Row count used until the first render reports the real table height
const DEFAULT_PAGE_SIZE: usize = 20;

/// Grid columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Type,
    Account,
    AccountAlias,
    Region,
    Tags,
    PrivateDns,
    PrivateIp,
    Arn,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::Id,
        Column::Type,
        Column::Account,
        Column::AccountAlias,
        Column::Region,
        Column::Tags,
        Column::PrivateDns,
        Column::PrivateIp,
        Column::Arn,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Type => "Type",
            Column::Account => "Account",
            Column::AccountAlias => "Account Alias",
            Column::Region => "Region",
            Column::Tags => "Tags",
            Column::PrivateDns => "Private DNS",
            Column::PrivateIp => "Private IP",
            Column::Arn => "ARN",
        }
    }

    /// Width as a percentage of the table area
    pub fn width(self) -> u16 {
        match self {
            Column::Id => 12,
            Column::Type => 7,
            Column::Account => 9,
            Column::AccountAlias => 9,
            Column::Region => 9,
            Column::Tags => 20,
            Column::PrivateDns => 12,
            Column::PrivateIp => 8,
            Column::Arn => 14,
        }
    }

    /// Whether the column accepts a text filter. Tags are sort-only.
    pub fn filterable(self) -> bool {
        !matches!(self, Column::Tags)
    }

    /// Plain text of the cell, used for sorting, filtering and truncation
    pub fn cell_text(self, resource: &Resource) -> Cow<'_, str> {
        match self {
            Column::Id => Cow::Borrowed(&resource.id),
            Column::Type => Cow::Borrowed(&resource.resource_type),
            Column::Account => Cow::Borrowed(&resource.account),
            Column::AccountAlias => Cow::Borrowed(&resource.account_alias),
            Column::Region => Cow::Borrowed(&resource.region),
            Column::Tags => Cow::Owned(tag_badges(resource).join(" ")),
            Column::PrivateDns => Cow::Borrowed(&resource.private_dns_name),
            Column::PrivateIp => Cow::Borrowed(&resource.ip),
            Column::Arn => Cow::Borrowed(&resource.arn),
        }
    }
}

/// One `key=value` badge per tag pair, duplicates included
pub fn tag_badges(resource: &Resource) -> Vec<String> {
    resource.tags.iter().map(Tag::badge).collect()
}

/// Active column sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: usize,
    pub ascending: bool,
}

/// Table state for the list view
#[derive(Debug, Clone)]
pub struct GridState {
    column_filters: Vec<String>,
    sort: Option<Sort>,
    focused_column: usize,
    rows: Vec<usize>,
    total: usize,
    selected: usize,
    page_size: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

impl GridState {
    pub fn new() -> Self {
        Self {
            column_filters: vec![String::new(); Column::ALL.len()],
            sort: None,
            focused_column: 0,
            rows: Vec::new(),
            total: 0,
            selected: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Recompute visible rows from the facet predicate, column filters and sort
    pub fn refresh(&mut self, resources: &[Resource], filter: &FilterState) {
        let needles: Vec<(Column, String)> = Column::ALL
            .iter()
            .zip(&self.column_filters)
            .filter(|(_, text)| !text.is_empty())
            .map(|(col, text)| (*col, text.to_lowercase()))
            .collect();

        self.rows = resources
            .iter()
            .enumerate()
            .filter(|(_, r)| passes_filter(r, filter))
            .filter(|(_, r)| {
                needles
                    .iter()
                    .all(|(col, needle)| col.cell_text(r).to_lowercase().contains(needle))
            })
            .map(|(idx, _)| idx)
            .collect();
        self.total = resources.len();

        if let Some(sort) = self.sort {
            let column = Column::ALL[sort.column];
            self.rows.sort_by(|&a, &b| {
                let cmp = compare_cells(
                    &column.cell_text(&resources[a]),
                    &column.cell_text(&resources[b]),
                );
                if sort.ascending {
                    cmp
                } else {
                    cmp.reverse()
                }
            });
        }

        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
    }

    /// Collection indices of the visible rows, in display order
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Size of the collection at the last refresh
    pub fn total(&self) -> usize {
        self.total
    }

    // =========================================================================
    // Column filters and sorting
    // =========================================================================

    pub fn focused_column(&self) -> usize {
        self.focused_column
    }

    pub fn focus_next_column(&mut self) {
        self.focused_column = (self.focused_column + 1).min(Column::ALL.len() - 1);
    }

    pub fn focus_previous_column(&mut self) {
        self.focused_column = self.focused_column.saturating_sub(1);
    }

    pub fn column_filter(&self, column: usize) -> &str {
        self.column_filters
            .get(column)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn has_column_filters(&self) -> bool {
        self.column_filters.iter().any(|f| !f.is_empty())
    }

    /// Mutable filter text of the focused column, `None` if it is not filterable.
    /// Callers refresh afterwards.
    pub fn focused_filter_mut(&mut self) -> Option<&mut String> {
        let column = Column::ALL[self.focused_column];
        if !column.filterable() {
            return None;
        }
        self.column_filters.get_mut(self.focused_column)
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    /// Sort by `column`, toggling direction if it is already the sort column.
    /// Callers refresh afterwards.
    pub fn sort_by_column(&mut self, column: usize) {
        if column >= Column::ALL.len() {
            return;
        }
        self.sort = match self.sort {
            Some(current) if current.column == column => Some(Sort {
                column,
                ascending: !current.ascending,
            }),
            _ => Some(Sort {
                column,
                ascending: true,
            }),
        };
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    // =========================================================================
    // Selection and pagination
    // =========================================================================

    /// Position of the cursor within the visible rows
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Collection index under the cursor
    pub fn selected_row(&self) -> Option<usize> {
        self.rows.get(self.selected).copied()
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based page holding the cursor
    pub fn page(&self) -> usize {
        self.selected / self.page_size
    }

    /// Number of pages, at least one
    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(self.page_size).max(1)
    }

    /// Range of visible-row positions on the current page
    pub fn page_range(&self) -> Range<usize> {
        let start = self.page() * self.page_size;
        let end = (start + self.page_size).min(self.rows.len());
        start.min(end)..end
    }

    pub fn next(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + 1).min(self.rows.len() - 1);
        }
    }

    pub fn previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn go_to_top(&mut self) {
        self.selected = 0;
    }

    pub fn go_to_bottom(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    pub fn next_page(&mut self) {
        if self.page() + 1 < self.page_count() {
            self.selected = (self.page() + 1) * self.page_size;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page() > 0 {
            self.selected = (self.page() - 1) * self.page_size;
        }
    }
}

/// Sort key of one cell: numbers order before text
#[derive(Debug)]
enum CellKey {
    Number(f64),
    Text(String),
}

impl CellKey {
    fn of(cell: &str) -> Self {
        match cell.parse::<f64>() {
            Ok(n) => CellKey::Number(n),
            Err(_) => CellKey::Text(cell.to_lowercase()),
        }
    }
}

/// Total order over cells: numeric cells by value through `total_cmp`,
/// text cells case-insensitively, every number before every text cell.
fn compare_cells(a: &str, b: &str) -> Ordering {
    match (CellKey::of(a), CellKey::of(b)) {
        (CellKey::Number(na), CellKey::Number(nb)) => na.total_cmp(&nb),
        (CellKey::Number(_), CellKey::Text(_)) => Ordering::Less,
        (CellKey::Text(_), CellKey::Number(_)) => Ordering::Greater,
        (CellKey::Text(ta), CellKey::Text(tb)) => ta.cmp(&tb),
    }
}
