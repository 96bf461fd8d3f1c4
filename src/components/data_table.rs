//! DataTable component
//!
//! Owns the reducer state of one table and translates keys, mouse clicks and
//! Actions into reducer transitions. Callbacks fire synchronously after the
//! transition that caused them.

use super::layout::{
    calculate_column_geometry, calculate_table_layout, contains, ColumnGeometry, TableLayout,
};
use super::pagination_bar::{render_pagination, PageButton, PaginationHits, PaginationView};
use super::table_head::{render_divider, render_head, HeadView, SelectAllState};
use super::table_header::{render_header, render_sub_header, HeaderContent};
use super::table_row::{expander_lines, render_expander_row, render_row, RowView};
use crate::action::Action;
use crate::component::Component;
use crate::model::pagination::{clamp_page, last_page, number_of_pages};
use crate::model::{
    decorate_columns, sort_rows, table_reducer, Column, PaginationState, RowData, SortDirection,
    SortState, TableAction, TableCallbacks, TableProps, TableState,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Two clicks on the same row within this window count as a double click
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, PartialEq, Eq)]
struct RowHit {
    area: Rect,
    index: usize,
    checkbox: Option<Rect>,
    expander: Option<Rect>,
    /// Cells of columns that ignore row clicks
    ignored: Vec<Rect>,
}

/// Clickable areas recorded by the last draw
#[derive(Debug, Clone, Default)]
struct HitMap {
    head: Vec<(Rect, usize)>,
    select_all: Option<Rect>,
    rows: Vec<RowHit>,
    pagination: PaginationHits,
}

pub struct DataTable<T> {
    columns: Vec<Column<T>>,
    props: TableProps<T>,
    callbacks: TableCallbacks<T>,
    state: TableState<T>,
    /// Focused row within the current view
    focused_row: usize,
    /// Focused column among the visible columns
    focused_column: usize,
    /// Identities of expanded rows
    expanded: HashSet<String>,
    /// First view row drawn in the body
    body_offset: usize,
    last_click: Option<(usize, Instant)>,
    /// Width of the last draw, drives column hiding
    last_width: u16,
    hits: HitMap,
}

impl<T: RowData> DataTable<T> {
    pub fn new(columns: Vec<Column<T>>, data: Vec<T>) -> Self {
        let mut table = Self {
            columns: decorate_columns(columns),
            props: TableProps::default(),
            callbacks: TableCallbacks::default(),
            state: TableState::default(),
            focused_row: 0,
            focused_column: 0,
            expanded: HashSet::new(),
            body_offset: 0,
            last_click: None,
            last_width: u16::MAX,
            hits: HitMap::default(),
        };
        table.mount(data);
        table
    }

    /// Replace the props and rebuild state from them
    pub fn with_props(mut self, props: TableProps<T>) -> Self {
        self.props = props;
        let data = std::mem::take(&mut self.state.rows);
        self.mount(data);
        self
    }

    pub fn with_callbacks(mut self, callbacks: TableCallbacks<T>) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Initial state: default sort, default page, preselected and pre-expanded rows
    fn mount(&mut self, data: Vec<T>) {
        let sort_column = self
            .props
            .default_sort_field_id
            .as_ref()
            .and_then(|id| self.columns.iter().find(|column| &column.id == id))
            .cloned();
        let sort_direction = if self.props.default_sort_asc {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        };
        let rows = match &sort_column {
            Some(column) if !self.props.sort_server => sort_rows(
                data,
                column,
                sort_direction,
                self.props.sort_function.as_ref(),
            ),
            _ => data,
        };

        let rows_per_page = self.props.pagination_per_page.max(1);
        let total_rows = self.props.total_rows(rows.len());
        let pagination = PaginationState {
            current_page: clamp_page(self.props.pagination_default_page, total_rows, rows_per_page),
            rows_per_page,
        };
        self.state = TableState::new(
            rows,
            SortState {
                selected_column: sort_column,
                sort_direction,
            },
            pagination,
        );

        if let Some(action) = self.preselection() {
            self.state = table_reducer(std::mem::take(&mut self.state), action);
        }
        self.expanded.clear();
        self.seed_expanded();
        self.focused_row = 0;
        self.focused_column = 0;
        self.body_offset = 0;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn state(&self) -> &TableState<T> {
        &self.state
    }

    pub fn props(&self) -> &TableProps<T> {
        &self.props
    }

    /// Runtime prop changes such as `progress_pending` or `disabled`
    pub fn props_mut(&mut self) -> &mut TableProps<T> {
        &mut self.props
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn focused_row(&self) -> usize {
        self.focused_row
    }

    pub fn focused_column(&self) -> usize {
        self.focused_column
    }

    /// Rows of the current view: the current page, or every row
    pub fn visible_rows(&self) -> &[T] {
        if self.props.pagination && !self.props.pagination_server {
            self.state.page_rows()
        } else {
            self.state.rows.as_slice()
        }
    }

    /// Row count used for paging
    pub fn total_rows(&self) -> usize {
        self.props.total_rows(self.state.rows.len())
    }

    pub fn page_count(&self) -> usize {
        number_of_pages(self.total_rows(), self.state.pagination.rows_per_page)
    }

    pub fn focused(&self) -> Option<&T> {
        self.visible_rows().get(self.focused_row)
    }

    pub fn visible_columns(&self) -> Vec<&Column<T>> {
        self.columns
            .iter()
            .filter(|column| column.is_visible(self.last_width))
            .collect()
    }

    pub fn is_expanded(&self, row: &T) -> bool {
        self.expanded.contains(&self.row_identity(row))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Caller-driven changes
    // ─────────────────────────────────────────────────────────────────────────

    /// Hand the table a new data array
    pub fn set_data(&mut self, rows: Vec<T>) {
        let reset_page = self
            .props
            .pagination_reset_default_page
            .then_some(self.props.pagination_default_page);
        let total_rows = self
            .props
            .pagination_server
            .then(|| self.props.total_rows(rows.len()));

        self.dispatch(TableAction::UpdateRows {
            rows,
            key_field: self.props.key_field.clone(),
            sort_function: self.props.sort_function.clone(),
            sort_server: self.props.sort_server,
            merge_selections: self.props.merge_selections(),
            total_rows,
            reset_page,
        });
        if let Some(action) = self.preselection() {
            self.dispatch(action);
        }

        let live: HashSet<String> = self
            .state
            .rows
            .iter()
            .map(|row| self.row_identity(row))
            .collect();
        self.expanded.retain(|id| live.contains(id));
        self.seed_expanded();
        self.clamp_focus();
    }

    /// Clear the selection when `flag` differs from the last seen value
    pub fn clear_selected_rows(&mut self, flag: bool) {
        if flag != self.state.selected_rows_flag {
            self.dispatch(TableAction::ClearSelectedRows {
                selected_rows_flag: flag,
            });
        }
    }

    /// Select exactly these rows
    pub fn select_rows(&mut self, rows: Vec<T>) {
        let selectable: Vec<T> = rows
            .into_iter()
            .filter(|row| self.props.is_row_selectable(row))
            .collect();
        self.dispatch(TableAction::SelectMultipleRows {
            key_field: self.props.key_field.clone(),
            selected_rows: selectable,
            total_rows: self.state.rows.len(),
            merge_selections: self.props.merge_selections(),
        });
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reducer plumbing
    // ─────────────────────────────────────────────────────────────────────────

    /// Run the reducer, then report selection and page changes it caused
    fn dispatch(&mut self, action: TableAction<T>) {
        let marker = self.state.toggle_on_selected_rows_change;
        let page = self.state.pagination.current_page;
        self.state = table_reducer(std::mem::take(&mut self.state), action);

        if self.state.toggle_on_selected_rows_change != marker {
            debug!(
                "selection changed: {} row(s)",
                self.state.selection.selected_count
            );
            if let Some(callback) = self.callbacks.on_selected_rows_change.as_mut() {
                callback(&self.state.selection);
            }
        }

        let current_page = self.state.pagination.current_page;
        if current_page != page {
            debug!("page changed: {} -> {}", page, current_page);
            let total_rows = self.total_rows();
            if let Some(callback) = self.callbacks.on_change_page.as_mut() {
                callback(current_page, total_rows);
            }
        }
        self.clamp_focus();
    }

    /// Rows the caller marked as selected, as a reducer action
    fn preselection(&self) -> Option<TableAction<T>> {
        let predicate = self.props.selectable_row_selected.as_ref()?;
        if !self.props.selectable_rows {
            return None;
        }
        let mut selected: Vec<T> = self
            .state
            .rows
            .iter()
            .filter(|row| predicate(row) && self.props.is_row_selectable(row))
            .cloned()
            .collect();
        if self.props.selectable_rows_single {
            selected.truncate(1);
        }
        Some(TableAction::SelectMultipleRows {
            key_field: self.props.key_field.clone(),
            selected_rows: selected,
            total_rows: self.state.rows.len(),
            merge_selections: self.props.merge_selections(),
        })
    }

    fn seed_expanded(&mut self) {
        if !self.props.expandable_rows {
            return;
        }
        let Some(predicate) = self.props.expandable_row_expanded.clone() else {
            return;
        };
        let ids: Vec<String> = self
            .state
            .rows
            .iter()
            .filter(|row| predicate(row) && self.props.is_row_expandable(row))
            .map(|row| self.row_identity(row))
            .collect();
        self.expanded.extend(ids);
    }

    /// Key-field value, or the row's position for keyless rows
    fn row_identity(&self, row: &T) -> String {
        row.key(&self.props.key_field).unwrap_or_else(|| {
            let position = self.state.rows.iter().position(|r| r == row);
            format!("#{}", position.unwrap_or(usize::MAX))
        })
    }

    fn clamp_focus(&mut self) {
        let rows = self.visible_rows().len();
        self.focused_row = self.focused_row.min(rows.saturating_sub(1));
        self.body_offset = self.body_offset.min(self.focused_row);
        let columns = self.visible_columns().len();
        self.focused_column = self.focused_column.min(columns.saturating_sub(1));
    }

    /// Candidate rows for select-all
    fn selectable_rows_in_view(&self) -> Vec<T> {
        let rows = if self.props.selectable_rows_visible_only {
            self.visible_rows()
        } else {
            self.state.rows.as_slice()
        };
        rows.iter()
            .filter(|row| self.props.is_row_selectable(row))
            .cloned()
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Interactions
    // ─────────────────────────────────────────────────────────────────────────

    pub fn sort_by_column(&mut self, index: usize) {
        let Some(column) = self.visible_columns().get(index).map(|c| (*c).clone()) else {
            return;
        };
        if !column.can_sort() {
            return;
        }

        let direction = if self.state.sort.is_sorted_by(&column.id) {
            self.state.sort.sort_direction.toggle()
        } else {
            self.state.sort.sort_direction
        };
        let server = self.props.pagination_server_options;
        self.dispatch(TableAction::SortChange {
            selected_column: column.clone(),
            sort_direction: direction,
            sort_function: self.props.sort_function.clone(),
            sort_server: self.props.sort_server,
            pagination: self.props.pagination,
            pagination_server: self.props.pagination_server,
            visible_only: self.props.selectable_rows_visible_only,
            persist_selected_on_sort: server.persist_selected_on_sort,
        });
        self.focused_row = 0;
        self.body_offset = 0;

        if let Some(callback) = self.callbacks.on_sort.as_mut() {
            callback(&column, direction);
        }
    }

    pub fn change_page(&mut self, page: usize) {
        if !self.props.pagination {
            return;
        }
        let total_rows = self.total_rows();
        let page = clamp_page(page, total_rows, self.state.pagination.rows_per_page);
        if page == self.state.pagination.current_page {
            return;
        }

        self.dispatch(TableAction::ChangePage {
            page,
            total_rows,
            pagination_server: self.props.pagination_server,
            visible_only: self.props.selectable_rows_visible_only,
            persist_selected_on_page_change: self
                .props
                .pagination_server_options
                .persist_selected_on_page_change,
        });
        self.focused_row = 0;
        self.body_offset = 0;
    }

    pub fn change_rows_per_page(&mut self, rows_per_page: usize) {
        if !self.props.pagination || rows_per_page == self.state.pagination.rows_per_page {
            return;
        }
        self.dispatch(TableAction::ChangeRowsPerPage {
            rows_per_page,
            page: self.state.pagination.current_page,
            total_rows: self.total_rows(),
        });
        self.focused_row = 0;
        self.body_offset = 0;

        let pagination = self.state.pagination;
        if let Some(callback) = self.callbacks.on_change_rows_per_page.as_mut() {
            callback(pagination.rows_per_page, pagination.current_page);
        }
    }

    /// Step through the rows-per-page choices, stopping at either end
    fn step_rows_per_page(&mut self, forward: bool) {
        if self.props.pagination_options.no_rows_per_page {
            return;
        }
        let choices = self.props.rows_per_page_choices(self.total_rows());
        let current = self.state.pagination.rows_per_page;
        let next = if forward {
            choices.iter().copied().find(|choice| *choice > current)
        } else {
            choices.iter().rev().copied().find(|choice| *choice < current)
        };
        if let Some(rows_per_page) = next {
            self.change_rows_per_page(rows_per_page);
        }
    }

    /// Next rows-per-page choice, wrapping from the largest to the smallest
    fn cycle_rows_per_page(&mut self) {
        if self.props.pagination_options.no_rows_per_page {
            return;
        }
        let choices = self.props.rows_per_page_choices(self.total_rows());
        let current = self.state.pagination.rows_per_page;
        let next = choices
            .iter()
            .copied()
            .find(|choice| *choice > current)
            .or_else(|| choices.first().copied());
        if let Some(rows_per_page) = next {
            self.change_rows_per_page(rows_per_page);
        }
    }

    pub fn toggle_row(&mut self, index: usize) {
        if !self.props.selectable_rows {
            return;
        }
        let Some(row) = self.visible_rows().get(index).cloned() else {
            return;
        };
        if !self.props.is_row_selectable(&row) {
            return;
        }
        let row_count = self.selectable_rows_in_view().len();
        self.dispatch(TableAction::SelectSingleRow {
            key_field: self.props.key_field.clone(),
            row,
            row_count,
            single_select: self.props.selectable_rows_single,
        });
    }

    pub fn toggle_all_rows(&mut self) {
        if !self.props.selectable_rows
            || self.props.selectable_rows_single
            || self.props.selectable_rows_no_select_all
        {
            return;
        }
        let rows = self.selectable_rows_in_view();
        self.dispatch(TableAction::SelectAllRows {
            key_field: self.props.key_field.clone(),
            row_count: rows.len(),
            rows,
            merge_selections: self.props.merge_selections(),
        });
    }

    pub fn click_row(&mut self, index: usize) {
        let Some(row) = self.visible_rows().get(index).cloned() else {
            return;
        };
        if let Some(callback) = self.callbacks.on_row_clicked.as_mut() {
            callback(&row);
        }
        if self.props.expand_on_row_clicked {
            self.toggle_expansion(index);
        }
    }

    pub fn double_click_row(&mut self, index: usize) {
        let Some(row) = self.visible_rows().get(index).cloned() else {
            return;
        };
        if let Some(callback) = self.callbacks.on_row_double_clicked.as_mut() {
            callback(&row);
        }
        if self.props.expand_on_row_double_clicked {
            self.toggle_expansion(index);
        }
    }

    pub fn toggle_expansion(&mut self, index: usize) {
        let Some(row) = self.visible_rows().get(index).cloned() else {
            return;
        };
        if !self.props.is_row_expandable(&row) {
            return;
        }
        let id = self.row_identity(&row);
        let expanded = if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        };
        if let Some(callback) = self.callbacks.on_row_expand_toggled.as_mut() {
            callback(expanded, &row);
        }
    }

    fn focus_row(&mut self, index: usize) {
        let rows = self.visible_rows().len();
        self.focused_row = index.min(rows.saturating_sub(1));
    }

    fn focus_column(&mut self, index: usize) {
        let columns = self.visible_columns().len();
        self.focused_column = index.min(columns.saturating_sub(1));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    /// Lines a row takes in the body, including its divider
    fn row_height(&self, row: &T) -> usize {
        let mut height = 1;
        if self.props.expandable_rows && self.is_expanded(row) {
            height += expander_lines(&self.props, row).len();
        }
        if !self.props.dense {
            height += 1;
        }
        height
    }

    /// Move the body offset so the focused row fits in `height` lines
    fn scroll_to_focus(&mut self, height: usize) {
        if self.focused_row < self.body_offset {
            self.body_offset = self.focused_row;
            return;
        }
        let heights: Vec<usize> = self
            .visible_rows()
            .iter()
            .map(|row| self.row_height(row))
            .collect();
        if heights.is_empty() {
            self.body_offset = 0;
            return;
        }
        let focused = self.focused_row.min(heights.len() - 1);
        while self.body_offset < focused
            && heights[self.body_offset..=focused].iter().sum::<usize>() > height
        {
            self.body_offset += 1;
        }
    }

    fn select_all_state(&self) -> Option<SelectAllState> {
        let shown = self.props.selectable_rows
            && !self.props.selectable_rows_single
            && !self.props.selectable_rows_no_select_all;
        shown.then(|| {
            SelectAllState::from_counts(
                self.state.selection.all_selected,
                self.state.selection.selected_count,
            )
        })
    }

    fn context_message(&self) -> Option<String> {
        let count = self.state.selection.selected_count;
        (self.props.selectable_rows && !self.props.no_context_menu && count > 0)
            .then(|| self.props.context_message.render(count))
    }

    fn layout(&self, area: Rect) -> (TableLayout, Option<HeaderContent>) {
        let props = &self.props;
        let has_rows = !self.visible_rows().is_empty();
        let header = if props.no_header {
            None
        } else {
            HeaderContent::resolve(props.title.as_deref(), self.context_message())
        };
        let show_head = !props.no_table_head
            && ((has_rows && !props.progress_pending) || props.persist_table_head);
        let show_pagination = props.pagination && has_rows && !props.progress_pending;

        let layout = calculate_table_layout(
            area,
            header.is_some(),
            props.sub_header.is_some(),
            show_head,
            show_pagination,
        );
        (layout, header)
    }

    fn render(
        &self,
        frame: &mut Frame,
        layout: &TableLayout,
        header: Option<&HeaderContent>,
    ) -> HitMap {
        let props = &self.props;
        let styles = &props.styles;
        let mut hits = HitMap::default();

        if let (Some(area), Some(content)) = (layout.header, header) {
            render_header(frame, area, content, styles);
        }
        if let (Some(area), Some(text)) = (layout.sub_header, props.sub_header.as_deref()) {
            render_sub_header(frame, area, text, props.sub_header_align, styles);
        }

        let columns = self.visible_columns();
        let constraints: Vec<_> = columns.iter().map(|column| column.constraint()).collect();
        let show_expander = props.expandable_rows && !props.expandable_rows_hide_expander;
        let geometry = calculate_column_geometry(
            layout.body,
            props.selectable_rows,
            show_expander,
            &constraints,
        );

        if let Some(area) = layout.head {
            let view = HeadView {
                columns: &columns,
                geometry: &geometry,
                sort: &self.state.sort,
                focused_column: Some(self.focused_column),
                select_all: self.select_all_state(),
                styles,
            };
            let (head, select_all) = render_head(frame, area, &view);
            if !props.disabled {
                hits.head = head;
                hits.select_all = select_all;
            }
        }

        if props.progress_pending {
            self.render_message(frame, layout.body, &props.progress_text, styles.progress);
        } else if self.visible_rows().is_empty() {
            self.render_message(frame, layout.body, &props.no_data_text, styles.no_data);
        } else {
            hits.rows = self.render_body(frame, layout.body, &columns, &geometry);
        }

        if let Some(area) = layout.pagination {
            let view = PaginationView {
                current_page: self.state.pagination.current_page,
                rows_per_page: self.state.pagination.rows_per_page,
                total_rows: self.total_rows(),
                options: &props.pagination_options,
            };
            let pagination = render_pagination(frame, area, &view, styles);
            if !props.disabled {
                hits.pagination = pagination;
            }
        }

        if props.disabled {
            hits.rows.clear();
        }
        hits
    }

    fn render_message(&self, frame: &mut Frame, area: Rect, text: &str, style: Style) {
        if area.height == 0 {
            return;
        }
        let line = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        frame.render_widget(
            Paragraph::new(text.to_string())
                .style(style)
                .alignment(Alignment::Center),
            line,
        );
    }

    fn render_body(
        &self,
        frame: &mut Frame,
        area: Rect,
        columns: &[&Column<T>],
        geometry: &ColumnGeometry,
    ) -> Vec<RowHit> {
        let props = &self.props;
        let key_field = props.key_field.as_str();
        let bottom = area.bottom();
        let mut y = area.y;
        let mut hits = Vec::new();

        for (index, row) in self
            .visible_rows()
            .iter()
            .enumerate()
            .skip(self.body_offset)
        {
            if y >= bottom {
                break;
            }
            let expanded = props.expandable_rows && self.is_expanded(row);
            let view = RowView {
                row,
                row_index: index,
                selected: self.state.is_selected(row, key_field),
                selectable: props.is_row_selectable(row),
                focused: index == self.focused_row,
                expanded,
                expandable: props.is_row_expandable(row),
            };
            let row_area = Rect::new(area.x, y, area.width, 1);
            render_row(frame, row_area, props, columns, geometry, &view);

            hits.push(RowHit {
                area: row_area,
                index,
                checkbox: geometry.checkbox.map(|band| band.rect(y, 1)),
                expander: geometry.expander.map(|band| band.rect(y, 1)),
                ignored: columns
                    .iter()
                    .zip(&geometry.columns)
                    .filter(|(column, _)| column.ignore_row_click)
                    .map(|(_, band)| band.rect(y, 1))
                    .collect(),
            });
            y += 1;

            if expanded {
                let lines = expander_lines(props, row);
                let height = (lines.len() as u16).min(bottom.saturating_sub(y));
                if height > 0 {
                    let expander_area = Rect::new(area.x, y, area.width, height);
                    render_expander_row(frame, expander_area, props, row, lines);
                }
                y += height;
            }

            if !props.dense && y < bottom {
                render_divider(frame, Rect::new(area.x, y, area.width, 1), &props.styles);
                y += 1;
            }
        }
        hits
    }

    /// Resolve a left click against the last draw
    fn hit_test(&mut self, column: u16, row: u16) -> Option<Action> {
        if self.hits.select_all.is_some_and(|rect| contains(rect, column, row)) {
            return Some(Action::ToggleAllRows);
        }
        if let Some((_, index)) = self
            .hits
            .head
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
        {
            return Some(Action::SortColumn(*index));
        }
        if let Some((_, button)) = self
            .hits
            .pagination
            .buttons
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
        {
            return Some(match button {
                PageButton::First => Action::FirstPage,
                PageButton::Prev => Action::PrevPage,
                PageButton::Next => Action::NextPage,
                PageButton::Last => Action::LastPage,
            });
        }
        if self
            .hits
            .pagination
            .rows_per_page
            .is_some_and(|rect| contains(rect, column, row))
        {
            return Some(Action::CycleRowsPerPage);
        }

        let hit = self
            .hits
            .rows
            .iter()
            .find(|hit| contains(hit.area, column, row))?
            .clone();
        if hit.checkbox.is_some_and(|rect| contains(rect, column, row)) {
            return Some(Action::ToggleRowSelection(hit.index));
        }
        if hit.expander.is_some_and(|rect| contains(rect, column, row)) {
            return Some(Action::ToggleRowExpansion(hit.index));
        }

        self.focused_row = hit.index;
        if hit.ignored.iter().any(|rect| contains(*rect, column, row)) {
            return None;
        }
        Some(self.register_click(hit.index, Instant::now()))
    }

    /// Click or double click, depending on the previous click
    fn register_click(&mut self, index: usize, at: Instant) -> Action {
        match self.last_click {
            Some((last, when)) if last == index && at.duration_since(when) < DOUBLE_CLICK_WINDOW => {
                self.last_click = None;
                Action::DoubleClickRow(index)
            }
            _ => {
                self.last_click = Some((index, at));
                Action::ClickRow(index)
            }
        }
    }
}

impl<T: RowData> Component for DataTable<T> {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.props.disabled {
            return Ok(None);
        }
        let row = self.focused_row;
        let action = match key.code {
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ToggleAllRows)
            }
            KeyCode::Char('j') | KeyCode::Down => Some(Action::FocusNextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::FocusPrevRow),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FocusFirstRow),
            KeyCode::Char('G') | KeyCode::End => Some(Action::FocusLastRow),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::FocusNextColumn),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::FocusPrevColumn),
            KeyCode::Char(' ') => Some(Action::ToggleRowSelection(row)),
            KeyCode::Char('a') => Some(Action::ToggleAllRows),
            KeyCode::Char('s') => Some(Action::SortColumn(self.focused_column)),
            KeyCode::Char(c @ '1'..='9') => {
                c.to_digit(10).map(|digit| Action::SortColumn(digit as usize - 1))
            }
            KeyCode::Enter => Some(Action::ClickRow(row)),
            KeyCode::Char('o') => Some(Action::DoubleClickRow(row)),
            KeyCode::Char('e') | KeyCode::Tab => Some(Action::ToggleRowExpansion(row)),
            KeyCode::Char(']') | KeyCode::PageDown => Some(Action::NextPage),
            KeyCode::Char('[') | KeyCode::PageUp => Some(Action::PrevPage),
            KeyCode::Char('}') => Some(Action::LastPage),
            KeyCode::Char('{') => Some(Action::FirstPage),
            KeyCode::Char('+') => Some(Action::NextRowsPerPage),
            KeyCode::Char('-') => Some(Action::PrevRowsPerPage),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.props.disabled {
            return Ok(None);
        }
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.hit_test(mouse.column, mouse.row),
            MouseEventKind::ScrollDown => Some(Action::FocusNextRow),
            MouseEventKind::ScrollUp => Some(Action::FocusPrevRow),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if self.props.disabled {
            return Ok(None);
        }
        let page = self.state.pagination.current_page;
        match action {
            Action::FocusNextRow => self.focus_row(self.focused_row.saturating_add(1)),
            Action::FocusPrevRow => self.focus_row(self.focused_row.saturating_sub(1)),
            Action::FocusFirstRow => self.focus_row(0),
            Action::FocusLastRow => self.focus_row(usize::MAX),
            Action::FocusNextColumn => self.focus_column(self.focused_column.saturating_add(1)),
            Action::FocusPrevColumn => self.focus_column(self.focused_column.saturating_sub(1)),
            Action::ToggleRowSelection(index) => self.toggle_row(index),
            Action::ToggleAllRows => self.toggle_all_rows(),
            Action::ClickRow(index) => self.click_row(index),
            Action::DoubleClickRow(index) => self.double_click_row(index),
            Action::ToggleRowExpansion(index) => self.toggle_expansion(index),
            Action::SortColumn(index) => self.sort_by_column(index),
            Action::GoToPage(target) => self.change_page(target),
            Action::NextPage => self.change_page(page.saturating_add(1)),
            Action::PrevPage => self.change_page(page.saturating_sub(1)),
            Action::FirstPage => self.change_page(0),
            Action::LastPage => self.change_page(last_page(
                self.total_rows(),
                self.state.pagination.rows_per_page,
            )),
            Action::NextRowsPerPage => self.step_rows_per_page(true),
            Action::PrevRowsPerPage => self.step_rows_per_page(false),
            Action::CycleRowsPerPage => self.cycle_rows_per_page(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.last_width = area.width;
        self.clamp_focus();

        let (layout, header) = self.layout(area);
        self.scroll_to_focus(layout.body.height as usize);
        self.hits = self.render(frame, &layout, header.as_ref());
        Ok(())
    }
}
