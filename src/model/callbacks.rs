//! Callbacks a table reports state changes through
//!
//! All callbacks run synchronously, right after the reducer transition that
//! caused them.

use super::column::Column;
use super::state::{SelectionState, SortDirection};

pub type SortCallback<T> = Box<dyn FnMut(&Column<T>, SortDirection)>;
/// `(page, total_rows)`, page is zero-based
pub type ChangePageCallback = Box<dyn FnMut(usize, usize)>;
/// `(rows_per_page, page)`
pub type ChangeRowsPerPageCallback = Box<dyn FnMut(usize, usize)>;
pub type SelectedRowsCallback<T> = Box<dyn FnMut(&SelectionState<T>)>;
pub type RowCallback<T> = Box<dyn FnMut(&T)>;
/// `(expanded, row)`
pub type ExpandToggledCallback<T> = Box<dyn FnMut(bool, &T)>;

pub struct TableCallbacks<T> {
    pub on_sort: Option<SortCallback<T>>,
    pub on_change_page: Option<ChangePageCallback>,
    pub on_change_rows_per_page: Option<ChangeRowsPerPageCallback>,
    pub on_selected_rows_change: Option<SelectedRowsCallback<T>>,
    pub on_row_clicked: Option<RowCallback<T>>,
    pub on_row_double_clicked: Option<RowCallback<T>>,
    pub on_row_expand_toggled: Option<ExpandToggledCallback<T>>,
}

impl<T> Default for TableCallbacks<T> {
    fn default() -> Self {
        Self {
            on_sort: None,
            on_change_page: None,
            on_change_rows_per_page: None,
            on_selected_rows_change: None,
            on_row_clicked: None,
            on_row_double_clicked: None,
            on_row_expand_toggled: None,
        }
    }
}

impl<T> TableCallbacks<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_sort(mut self, f: impl FnMut(&Column<T>, SortDirection) + 'static) -> Self {
        self.on_sort = Some(Box::new(f));
        self
    }

    pub fn on_change_page(mut self, f: impl FnMut(usize, usize) + 'static) -> Self {
        self.on_change_page = Some(Box::new(f));
        self
    }

    pub fn on_change_rows_per_page(mut self, f: impl FnMut(usize, usize) + 'static) -> Self {
        self.on_change_rows_per_page = Some(Box::new(f));
        self
    }

    pub fn on_selected_rows_change(
        mut self,
        f: impl FnMut(&SelectionState<T>) + 'static,
    ) -> Self {
        self.on_selected_rows_change = Some(Box::new(f));
        self
    }

    pub fn on_row_clicked(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.on_row_clicked = Some(Box::new(f));
        self
    }

    pub fn on_row_double_clicked(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.on_row_double_clicked = Some(Box::new(f));
        self
    }

    pub fn on_row_expand_toggled(mut self, f: impl FnMut(bool, &T) + 'static) -> Self {
        self.on_row_expand_toggled = Some(Box::new(f));
        self
    }
}
