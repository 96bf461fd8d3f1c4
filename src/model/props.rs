//! Table props - the caller's configuration of a table

use super::column::{Alignment, ColumnId};
use super::conditional::{ConditionalStyle, RowPredicate};
use super::sort::SortFunction;
use super::styles::TableStyles;
use ratatui::text::Line;
use std::rc::Rc;

/// Produces the body of an expanded row
pub type ExpandedContent<T> = Rc<dyn Fn(&T) -> Vec<Line<'static>>>;

/// Wording of the header shown while rows are selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMessage {
    pub singular: String,
    pub plural: String,
    pub message: String,
}

impl Default for ContextMessage {
    fn default() -> Self {
        Self {
            singular: "item".to_string(),
            plural: "items".to_string(),
            message: "selected".to_string(),
        }
    }
}

impl ContextMessage {
    pub fn render(&self, count: usize) -> String {
        let noun = if count == 1 { &self.singular } else { &self.plural };
        format!("{} {} {}", count, noun, self.message)
    }
}

/// Pagination bar wording and options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationOptions {
    pub no_rows_per_page: bool,
    pub rows_per_page_text: String,
    pub range_separator_text: String,
    /// Offer an extra option that shows every row on one page
    pub select_all_rows_item: bool,
    pub select_all_rows_item_text: String,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            no_rows_per_page: false,
            rows_per_page_text: "Rows per page:".to_string(),
            range_separator_text: "of".to_string(),
            select_all_rows_item: false,
            select_all_rows_item_text: "All".to_string(),
        }
    }
}

/// How selection survives server-side page and sort changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationServerOptions {
    pub persist_selected_on_sort: bool,
    pub persist_selected_on_page_change: bool,
}

/// Everything a caller can configure on a table besides columns and data
pub struct TableProps<T> {
    pub key_field: String,

    // Header
    pub title: Option<String>,
    pub no_header: bool,
    pub sub_header: Option<String>,
    pub sub_header_align: Alignment,
    pub no_context_menu: bool,
    pub context_message: ContextMessage,

    // Head
    pub no_table_head: bool,
    pub persist_table_head: bool,

    // Rows
    pub dense: bool,
    pub striped: bool,
    pub highlight_on_hover: bool,
    pub disabled: bool,
    pub conditional_row_styles: Vec<ConditionalStyle<T>>,

    // Selection
    pub selectable_rows: bool,
    pub selectable_rows_single: bool,
    pub selectable_rows_highlight: bool,
    pub selectable_rows_no_select_all: bool,
    pub selectable_rows_visible_only: bool,
    pub selectable_row_disabled: Option<RowPredicate<T>>,
    pub selectable_row_selected: Option<RowPredicate<T>>,

    // Expansion
    pub expandable_rows: bool,
    pub expandable_rows_hide_expander: bool,
    pub expand_on_row_clicked: bool,
    pub expand_on_row_double_clicked: bool,
    pub expandable_inherit_conditional_styles: bool,
    pub expandable_row_disabled: Option<RowPredicate<T>>,
    pub expandable_row_expanded: Option<RowPredicate<T>>,
    pub expandable_rows_component: Option<ExpandedContent<T>>,

    // Pagination
    pub pagination: bool,
    pub pagination_server: bool,
    pub pagination_total_rows: Option<usize>,
    pub pagination_default_page: usize,
    pub pagination_reset_default_page: bool,
    pub pagination_per_page: usize,
    pub pagination_rows_per_page_options: Vec<usize>,
    pub pagination_options: PaginationOptions,
    pub pagination_server_options: PaginationServerOptions,

    // Sorting
    pub sort_server: bool,
    pub default_sort_field_id: Option<ColumnId>,
    pub default_sort_asc: bool,
    pub sort_function: Option<SortFunction<T>>,

    // Empty and loading states
    pub progress_pending: bool,
    pub progress_text: String,
    pub no_data_text: String,

    pub styles: TableStyles,
}

impl<T> Default for TableProps<T> {
    fn default() -> Self {
        Self {
            key_field: "id".to_string(),
            title: None,
            no_header: false,
            sub_header: None,
            sub_header_align: Alignment::Right,
            no_context_menu: false,
            context_message: ContextMessage::default(),
            no_table_head: false,
            persist_table_head: false,
            dense: false,
            striped: false,
            highlight_on_hover: true,
            disabled: false,
            conditional_row_styles: Vec::new(),
            selectable_rows: false,
            selectable_rows_single: false,
            selectable_rows_highlight: false,
            selectable_rows_no_select_all: false,
            selectable_rows_visible_only: false,
            selectable_row_disabled: None,
            selectable_row_selected: None,
            expandable_rows: false,
            expandable_rows_hide_expander: false,
            expand_on_row_clicked: false,
            expand_on_row_double_clicked: false,
            expandable_inherit_conditional_styles: false,
            expandable_row_disabled: None,
            expandable_row_expanded: None,
            expandable_rows_component: None,
            pagination: false,
            pagination_server: false,
            pagination_total_rows: None,
            pagination_default_page: 0,
            pagination_reset_default_page: false,
            pagination_per_page: 10,
            pagination_rows_per_page_options: vec![10, 15, 20, 25, 30],
            pagination_options: PaginationOptions::default(),
            pagination_server_options: PaginationServerOptions::default(),
            sort_server: false,
            default_sort_field_id: None,
            default_sort_asc: true,
            sort_function: None,
            progress_pending: false,
            progress_text: "Loading...".to_string(),
            no_data_text: "There are no records to display".to_string(),
            styles: TableStyles::default(),
        }
    }
}

impl<T> TableProps<T> {
    /// Whether bulk selections union with the prior selection
    pub fn merge_selections(&self) -> bool {
        self.pagination_server
            && (self.pagination_server_options.persist_selected_on_page_change
                || self.pagination_server_options.persist_selected_on_sort)
    }

    /// Row count used for paging; servers report their own total
    pub fn total_rows(&self, row_count: usize) -> usize {
        if self.pagination_server {
            self.pagination_total_rows.unwrap_or(row_count)
        } else {
            row_count
        }
    }

    pub fn is_row_selectable(&self, row: &T) -> bool {
        self.selectable_row_disabled
            .as_ref()
            .map_or(true, |disabled| !disabled(row))
    }

    pub fn is_row_expandable(&self, row: &T) -> bool {
        self.expandable_rows
            && self
                .expandable_row_disabled
                .as_ref()
                .map_or(true, |disabled| !disabled(row))
    }

    /// Rows-per-page choices offered by the pagination bar
    pub fn rows_per_page_choices(&self, total_rows: usize) -> Vec<usize> {
        let mut choices = self.pagination_rows_per_page_options.clone();
        choices.push(self.pagination_per_page);
        if self.pagination_options.select_all_rows_item && total_rows > 0 {
            choices.push(total_rows);
        }
        choices.sort_unstable();
        choices.dedup();
        choices
    }
}
