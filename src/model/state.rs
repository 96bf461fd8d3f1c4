//! Table state - everything the reducer owns
//!
//! State is created from props when the table mounts, replaced through the
//! reducer only, and dropped with the table.

use super::column::Column;
use super::pagination::page_slice;
use super::record::RowData;
use super::selection::is_row_selected;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Selected rows, as reported to `on_selected_rows_change`
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState<T> {
    pub all_selected: bool,
    pub selected_count: usize,
    pub selected_rows: Vec<T>,
}

impl<T> Default for SelectionState<T> {
    fn default() -> Self {
        Self {
            all_selected: false,
            selected_count: 0,
            selected_rows: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SortState<T> {
    pub selected_column: Option<Column<T>>,
    pub sort_direction: SortDirection,
}

impl<T> Default for SortState<T> {
    fn default() -> Self {
        Self {
            selected_column: None,
            sort_direction: SortDirection::Asc,
        }
    }
}

impl<T> SortState<T> {
    pub fn is_sorted_by(&self, column_id: &str) -> bool {
        self.selected_column
            .as_ref()
            .is_some_and(|column| column.id == column_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub rows_per_page: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 0,
            rows_per_page: 10,
        }
    }
}

/// Reducer-owned table state
#[derive(Debug, Clone)]
pub struct TableState<T> {
    /// Working row array, sorted by the current sort column
    pub rows: Vec<T>,
    pub selection: SelectionState<T>,
    pub sort: SortState<T>,
    pub pagination: PaginationState,
    /// Last value of the caller's clear-selection toggle
    pub selected_rows_flag: bool,
    /// Flips on every selection transition
    pub toggle_on_selected_rows_change: bool,
}

impl<T> Default for TableState<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            selection: SelectionState::default(),
            sort: SortState::default(),
            pagination: PaginationState::default(),
            selected_rows_flag: false,
            toggle_on_selected_rows_change: false,
        }
    }
}

impl<T: RowData> TableState<T> {
    pub fn new(rows: Vec<T>, sort: SortState<T>, pagination: PaginationState) -> Self {
        Self {
            rows,
            sort,
            pagination,
            ..Self::default()
        }
    }

    pub fn is_selected(&self, row: &T, key_field: &str) -> bool {
        is_row_selected(row, &self.selection.selected_rows, key_field)
    }

    /// Rows on the current page of the working array
    pub fn page_rows(&self) -> &[T] {
        page_slice(
            &self.rows,
            self.pagination.current_page,
            self.pagination.rows_per_page,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::Record;

    #[test]
    fn test_sort_direction_toggle() {
        assert_eq!(SortDirection::Asc.toggle(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggle(), SortDirection::Asc);
        assert_eq!(SortDirection::Desc.to_string(), "desc");
    }

    #[test]
    fn test_page_rows() {
        let rows: Vec<Record> = (0..7).map(|i| Record::new().with("id", i)).collect();
        let state = TableState::new(
            rows,
            SortState::default(),
            PaginationState {
                current_page: 1,
                rows_per_page: 5,
            },
        );

        assert_eq!(state.page_rows().len(), 2);
        assert_eq!(state.page_rows()[0].key("id"), Some("5".to_string()));
    }
}
