//! Interactive table state and the pure derivation of what is on screen.
//!
//! The view owns sort, selection and pagination state only. Orders and the
//! loading/error flags belong to the data store and are passed in on every
//! derivation, so nothing here is cached between renders.

use std::{collections::HashSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use shared::domain::{OrderNumber, OrdersState};
use shared::protocol::Order;
use tracing::debug;

use crate::{
    error::ParseError,
    row::{project, Row, RowField},
    sorting::{comparator, stable_sort, SortDirection},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    TwentyFive,
}

impl PageSize {
    pub const ALL: [Self; 3] = [Self::Five, Self::Ten, Self::TwentyFive];

    pub fn rows(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::TwentyFive => 25,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = ParseError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.rows() == value)
            .ok_or_else(|| ParseError::InvalidPageSize(value.to_string()))
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.rows()
    }
}

impl FromStr for PageSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: usize = s
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidPageSize(s.trim().to_string()))?;
        Self::try_from(rows)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows())
    }
}

/// Tri-state of the header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// What the row-list region shows for a given store snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRegion {
    Loading,
    Error,
    Empty,
    Populated(Vec<Row>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    sort_key: RowField,
    sort_direction: SortDirection,
    selected: HashSet<OrderNumber>,
    page: usize,
    page_size: PageSize,
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}

impl TableView {
    pub fn new() -> Self {
        Self {
            sort_key: RowField::OrderNumber,
            sort_direction: SortDirection::Ascending,
            selected: HashSet::new(),
            page: 0,
            page_size: PageSize::Five,
        }
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_sort(mut self, key: RowField, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.sort_direction = direction;
        self
    }

    pub fn sort_key(&self) -> RowField {
        self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Same field flips the direction; a new field starts ascending.
    pub fn request_sort(&mut self, field: RowField) {
        if field == self.sort_key {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = field;
            self.sort_direction = SortDirection::Ascending;
        }
        debug!(field = %self.sort_key, direction = %self.sort_direction, "sort requested");
    }

    /// Selects every row derived from `orders`, not just the current page.
    pub fn toggle_select_all(&mut self, checked: bool, orders: &[Order]) {
        if checked {
            self.selected = orders.iter().map(|order| order.order_number).collect();
        } else {
            self.selected.clear();
        }
        debug!(checked, selected = self.selected.len(), "select all toggled");
    }

    pub fn toggle_row(&mut self, key: OrderNumber) {
        if !self.selected.remove(&key) {
            self.selected.insert(key);
        }
    }

    /// Unvalidated; a page past the end yields an empty slice.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 0;
    }

    pub fn next_page(&mut self, total: usize) {
        let last = self.page_count(total).saturating_sub(1);
        self.page = (self.page + 1).min(last);
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn is_selected(&self, key: OrderNumber) -> bool {
        self.selected.contains(&key)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected keys that belong to `orders`; keys selected on another tab
    /// are not counted.
    pub fn selected_among(&self, orders: &[Order]) -> usize {
        orders
            .iter()
            .filter(|order| self.selected.contains(&order.order_number))
            .count()
    }

    /// Header checkbox state for the rows derived from `orders`.
    pub fn select_all_state(&self, orders: &[Order]) -> SelectAllState {
        let total = orders.len();
        let count = self.selected_among(orders);
        if total > 0 && count == total {
            SelectAllState::Checked
        } else if count > 0 && count < total {
            SelectAllState::Indeterminate
        } else {
            SelectAllState::Unchecked
        }
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.rows())
    }

    /// `"{from}-{to} of {count}"` for the current page.
    pub fn page_caption(&self, total: usize) -> String {
        let Some(start) = self.page.checked_mul(self.page_size.rows()) else {
            return format!("0-0 of {total}");
        };
        if total == 0 || start >= total {
            return format!("0-0 of {total}");
        }
        let end = start.saturating_add(self.page_size.rows()).min(total);
        format!("{}-{} of {total}", start + 1, end)
    }

    /// Projects, sorts and slices `orders` for the current state.
    pub fn visible_rows(&self, orders: &[Order]) -> Vec<Row> {
        let rows = project(orders);
        let sorted = stable_sort(&rows, comparator(self.sort_direction, self.sort_key));
        let rows_per_page = self.page_size.rows();
        sorted
            .into_iter()
            .skip(self.page.saturating_mul(rows_per_page))
            .take(rows_per_page)
            .collect()
    }

    pub fn region(&self, state: &OrdersState) -> TableRegion {
        if state.meta.is_loading {
            TableRegion::Loading
        } else if state.meta.is_error {
            TableRegion::Error
        } else if state.orders.is_empty() {
            TableRegion::Empty
        } else {
            TableRegion::Populated(self.visible_rows(&state.orders))
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
