//! Selection / sort / pagination reducer
//!
//! Every state change of a table goes through [`table_reducer`]. Each
//! transition is a pure `(state, action) -> state` step: no I/O, no callbacks.
//! Callers compare the before/after state to decide what to report upward.

use super::column::Column;
use super::pagination::clamp_page;
use super::record::RowData;
use super::selection::{insert_row, is_row_selected, is_same_row, remove_row};
use super::sort::{sort_rows, SortFunction};
use super::state::{SelectionState, SortDirection, SortState, TableState};
use log::debug;
use std::fmt;

/// Reducer input
pub enum TableAction<T> {
    /// Toggle selection for every row in view
    SelectAllRows {
        key_field: String,
        rows: Vec<T>,
        row_count: usize,
        merge_selections: bool,
    },
    /// Flip one row's selected flag
    SelectSingleRow {
        key_field: String,
        row: T,
        row_count: usize,
        single_select: bool,
    },
    /// Externally driven selection set
    SelectMultipleRows {
        key_field: String,
        selected_rows: Vec<T>,
        total_rows: usize,
        merge_selections: bool,
    },
    SortChange {
        selected_column: Column<T>,
        sort_direction: SortDirection,
        sort_function: Option<SortFunction<T>>,
        sort_server: bool,
        pagination: bool,
        pagination_server: bool,
        visible_only: bool,
        persist_selected_on_sort: bool,
    },
    ChangePage {
        page: usize,
        total_rows: usize,
        pagination_server: bool,
        visible_only: bool,
        persist_selected_on_page_change: bool,
    },
    ChangeRowsPerPage {
        rows_per_page: usize,
        page: usize,
        total_rows: usize,
    },
    /// Reset the selection; `selected_rows_flag` is the caller's toggle
    ClearSelectedRows { selected_rows_flag: bool },
    /// Replace the working rows with fresh data from the caller
    UpdateRows {
        rows: Vec<T>,
        key_field: String,
        sort_function: Option<SortFunction<T>>,
        sort_server: bool,
        merge_selections: bool,
        /// Total row count when pages come from a server
        total_rows: Option<usize>,
        /// Jump to this page instead of keeping the current one
        reset_page: Option<usize>,
    },
}

impl<T> TableAction<T> {
    pub fn kind(&self) -> &'static str {
        match self {
            TableAction::SelectAllRows { .. } => "SELECT_ALL_ROWS",
            TableAction::SelectSingleRow { .. } => "SELECT_SINGLE_ROW",
            TableAction::SelectMultipleRows { .. } => "SELECT_MULTIPLE_ROWS",
            TableAction::SortChange { .. } => "SORT_CHANGE",
            TableAction::ChangePage { .. } => "CHANGE_PAGE",
            TableAction::ChangeRowsPerPage { .. } => "CHANGE_ROWS_PER_PAGE",
            TableAction::ClearSelectedRows { .. } => "CLEAR_SELECTED_ROWS",
            TableAction::UpdateRows { .. } => "UPDATE_ROWS",
        }
    }
}

impl<T> fmt::Debug for TableAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

fn cleared<T>() -> SelectionState<T> {
    SelectionState::default()
}

/// Apply one action to the table state
pub fn table_reducer<T: RowData>(state: TableState<T>, action: TableAction<T>) -> TableState<T> {
    let mut state = state;
    let toggled = !state.toggle_on_selected_rows_change;
    debug!("reducer: {}", action.kind());

    match action {
        TableAction::SelectAllRows {
            key_field,
            rows,
            row_count,
            merge_selections,
        } => {
            let all_checked = !state.selection.all_selected && row_count > 0;
            let previous = std::mem::take(&mut state.selection.selected_rows);

            state.selection = if merge_selections {
                let selected_rows: Vec<T> = if all_checked {
                    let additions: Vec<T> = rows
                        .into_iter()
                        .filter(|row| !is_row_selected(row, &previous, &key_field))
                        .collect();
                    previous.into_iter().chain(additions).collect()
                } else {
                    previous
                        .into_iter()
                        .filter(|row| !is_row_selected(row, &rows, &key_field))
                        .collect()
                };
                SelectionState {
                    all_selected: all_checked,
                    selected_count: selected_rows.len(),
                    selected_rows,
                }
            } else if all_checked {
                SelectionState {
                    all_selected: true,
                    selected_count: row_count,
                    selected_rows: rows,
                }
            } else {
                cleared()
            };
            state.toggle_on_selected_rows_change = toggled;
        }

        TableAction::SelectSingleRow {
            key_field,
            row,
            row_count,
            single_select,
        } => {
            let is_selected = state.is_selected(&row, &key_field);
            let previous = std::mem::take(&mut state.selection.selected_rows);

            state.selection = match (single_select, is_selected) {
                (true, true) => cleared(),
                (true, false) => SelectionState {
                    all_selected: false,
                    selected_count: 1,
                    selected_rows: vec![row],
                },
                (false, true) => {
                    let selected_rows = remove_row(previous, &row, &key_field);
                    SelectionState {
                        all_selected: false,
                        selected_count: selected_rows.len(),
                        selected_rows,
                    }
                }
                (false, false) => {
                    let selected_rows = insert_row(previous, row);
                    SelectionState {
                        all_selected: selected_rows.len() == row_count,
                        selected_count: selected_rows.len(),
                        selected_rows,
                    }
                }
            };
            state.toggle_on_selected_rows_change = toggled;
        }

        TableAction::SelectMultipleRows {
            key_field,
            selected_rows,
            total_rows,
            merge_selections,
        } => {
            state.selection = if merge_selections {
                let previous = std::mem::take(&mut state.selection.selected_rows);
                let additions: Vec<T> = selected_rows
                    .into_iter()
                    .filter(|row| !is_row_selected(row, &previous, &key_field))
                    .collect();
                let merged: Vec<T> = previous.into_iter().chain(additions).collect();
                SelectionState {
                    all_selected: false,
                    selected_count: merged.len(),
                    selected_rows: merged,
                }
            } else {
                SelectionState {
                    all_selected: !selected_rows.is_empty() && selected_rows.len() == total_rows,
                    selected_count: selected_rows.len(),
                    selected_rows,
                }
            };
            state.toggle_on_selected_rows_change = toggled;
        }

        TableAction::SortChange {
            selected_column,
            sort_direction,
            sort_function,
            sort_server,
            pagination,
            pagination_server,
            visible_only,
            persist_selected_on_sort,
        } => {
            let clear_selected =
                (pagination && pagination_server && !persist_selected_on_sort)
                    || sort_server
                    || visible_only;

            if !sort_server {
                let rows = std::mem::take(&mut state.rows);
                state.rows = sort_rows(rows, &selected_column, sort_direction, sort_function.as_ref());
            }
            state.sort = SortState {
                selected_column: Some(selected_column),
                sort_direction,
            };
            if !persist_selected_on_sort {
                state.pagination.current_page = 0;
            }
            if clear_selected {
                state.selection = cleared();
                state.toggle_on_selected_rows_change = toggled;
            }
        }

        TableAction::ChangePage {
            page,
            total_rows,
            pagination_server,
            visible_only,
            persist_selected_on_page_change,
        } => {
            let merge_selections = pagination_server && persist_selected_on_page_change;
            let clear_selected =
                (pagination_server && !persist_selected_on_page_change) || visible_only;

            state.pagination.current_page =
                clamp_page(page, total_rows, state.pagination.rows_per_page);
            if merge_selections {
                state.selection.all_selected = false;
            }
            if clear_selected {
                state.selection = cleared();
                state.toggle_on_selected_rows_change = toggled;
            }
        }

        TableAction::ChangeRowsPerPage {
            rows_per_page,
            page,
            total_rows,
        } => {
            let rows_per_page = rows_per_page.max(1);
            state.pagination.rows_per_page = rows_per_page;
            state.pagination.current_page = clamp_page(page, total_rows, rows_per_page);
        }

        TableAction::ClearSelectedRows { selected_rows_flag } => {
            state.selection = cleared();
            state.selected_rows_flag = selected_rows_flag;
            state.toggle_on_selected_rows_change = toggled;
        }

        TableAction::UpdateRows {
            rows,
            key_field,
            sort_function,
            sort_server,
            merge_selections,
            total_rows,
            reset_page,
        } => {
            state.rows = match (&state.sort.selected_column, sort_server) {
                (Some(column), false) => sort_rows(
                    rows,
                    column,
                    state.sort.sort_direction,
                    sort_function.as_ref(),
                ),
                _ => rows,
            };

            // Keep selected rows that still exist, in their fresh version
            let previous = std::mem::take(&mut state.selection.selected_rows);
            let before = previous.len();
            let mut changed = false;
            let selected_rows: Vec<T> = previous
                .into_iter()
                .filter_map(|selected| {
                    match state.rows.iter().find(|row| is_same_row(&selected, row, &key_field)) {
                        Some(fresh) => {
                            changed |= *fresh != selected;
                            Some(fresh.clone())
                        }
                        None if merge_selections => Some(selected),
                        None => None,
                    }
                })
                .collect();
            changed |= selected_rows.len() != before;

            let all_selected = !state.rows.is_empty()
                && state
                    .rows
                    .iter()
                    .all(|row| is_row_selected(row, &selected_rows, &key_field));
            changed |= all_selected != state.selection.all_selected;

            state.selection = SelectionState {
                all_selected,
                selected_count: selected_rows.len(),
                selected_rows,
            };
            if changed {
                state.toggle_on_selected_rows_change = toggled;
            }

            let total_rows = total_rows.unwrap_or(state.rows.len());
            let page = reset_page.unwrap_or(state.pagination.current_page);
            state.pagination.current_page =
                clamp_page(page, total_rows, state.pagination.rows_per_page);
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::pagination::number_of_pages;
    use crate::model::record::Record;
    use crate::model::state::PaginationState;

    const KEY: &str = "id";

    fn rows(n: i64) -> Vec<Record> {
        (1..=n)
            .map(|i| Record::new().with("id", i).with("name", format!("row {:02}", i)))
            .collect()
    }

    fn state_with(rows: Vec<Record>, rows_per_page: usize) -> TableState<Record> {
        TableState::new(
            rows,
            SortState::default(),
            PaginationState {
                current_page: 0,
                rows_per_page,
            },
        )
    }

    fn select_all(rows: Vec<Record>, merge: bool) -> TableAction<Record> {
        let row_count = rows.len();
        TableAction::SelectAllRows {
            key_field: KEY.to_string(),
            rows,
            row_count,
            merge_selections: merge,
        }
    }

    fn select_one(row: Record, row_count: usize) -> TableAction<Record> {
        TableAction::SelectSingleRow {
            key_field: KEY.to_string(),
            row,
            row_count,
            single_select: false,
        }
    }

    fn sort_by_name(direction: SortDirection) -> TableAction<Record> {
        TableAction::SortChange {
            selected_column: Column::new("Name").id("name").field("name").sortable(),
            sort_direction: direction,
            sort_function: None,
            sort_server: false,
            pagination: true,
            pagination_server: false,
            visible_only: false,
            persist_selected_on_sort: false,
        }
    }

    fn change_page(page: usize, total_rows: usize) -> TableAction<Record> {
        TableAction::ChangePage {
            page,
            total_rows,
            pagination_server: false,
            visible_only: false,
            persist_selected_on_page_change: false,
        }
    }

    fn keys(rows: &[Record]) -> Vec<String> {
        rows.iter().filter_map(|row| row.key(KEY)).collect()
    }

    #[test]
    fn test_select_all_then_clear_yields_zero() {
        for n in 0..6 {
            let data = rows(n);
            let state = table_reducer(state_with(data.clone(), 10), select_all(data, false));
            let state = table_reducer(
                state,
                TableAction::ClearSelectedRows {
                    selected_rows_flag: true,
                },
            );

            assert_eq!(state.selection.selected_count, 0);
            assert!(state.selection.selected_rows.is_empty());
            assert!(!state.selection.all_selected);
        }
    }

    #[test]
    fn test_select_all_toggles() {
        let data = rows(4);
        let state = table_reducer(state_with(data.clone(), 10), select_all(data.clone(), false));
        assert!(state.selection.all_selected);
        assert_eq!(state.selection.selected_count, 4);

        let state = table_reducer(state, select_all(data, false));
        assert!(!state.selection.all_selected);
        assert_eq!(state.selection.selected_count, 0);
    }

    #[test]
    fn test_select_all_merges_across_pages() {
        let data = rows(6);
        let page_one = data[0..3].to_vec();
        let page_two = data[3..6].to_vec();

        let state = table_reducer(state_with(data, 3), select_all(page_one.clone(), true));
        // Page change with persisted selection resets only the all-selected flag
        let state = table_reducer(
            state,
            TableAction::ChangePage {
                page: 1,
                total_rows: 6,
                pagination_server: true,
                visible_only: false,
                persist_selected_on_page_change: true,
            },
        );
        assert!(!state.selection.all_selected);
        assert_eq!(state.selection.selected_count, 3);

        let state = table_reducer(state, select_all(page_two.clone(), true));
        assert_eq!(state.selection.selected_count, 6);
        assert_eq!(keys(&state.selection.selected_rows), vec!["1", "2", "3", "4", "5", "6"]);

        // Toggling off removes only the rows in view
        let state = table_reducer(state, select_all(page_two, true));
        assert_eq!(keys(&state.selection.selected_rows), keys(&page_one));
    }

    #[test]
    fn test_select_all_on_empty_view_is_noop() {
        let state = table_reducer(state_with(Vec::new(), 10), select_all(Vec::new(), false));
        assert!(!state.selection.all_selected);
        assert_eq!(state.selection.selected_count, 0);
    }

    #[test]
    fn test_single_row_toggle_twice_restores_state() {
        let data = rows(5);
        let initial = table_reducer(
            state_with(data.clone(), 10),
            select_one(data[1].clone(), 5),
        );

        for row in &data {
            let once = table_reducer(initial.clone(), select_one(row.clone(), 5));
            let twice = table_reducer(once, select_one(row.clone(), 5));

            assert_eq!(twice.selection.selected_count, initial.selection.selected_count);
            assert_eq!(twice.selection.all_selected, initial.selection.all_selected);
            let mut before = keys(&initial.selection.selected_rows);
            let mut after = keys(&twice.selection.selected_rows);
            before.sort();
            after.sort();
            assert_eq!(before, after);
        }
    }

    #[test]
    fn test_single_row_recomputes_all_selected() {
        let data = rows(2);
        let state = table_reducer(state_with(data.clone(), 10), select_one(data[0].clone(), 2));
        assert!(!state.selection.all_selected);

        let state = table_reducer(state, select_one(data[1].clone(), 2));
        assert!(state.selection.all_selected);
        assert_eq!(state.selection.selected_count, 2);

        let state = table_reducer(state, select_one(data[0].clone(), 2));
        assert!(!state.selection.all_selected);
        assert_eq!(state.selection.selected_count, 1);
    }

    #[test]
    fn test_single_select_mode_replaces_selection() {
        let data = rows(3);
        let single = |row: Record| TableAction::SelectSingleRow {
            key_field: KEY.to_string(),
            row,
            row_count: 3,
            single_select: true,
        };

        let state = table_reducer(state_with(data.clone(), 10), single(data[0].clone()));
        let state = table_reducer(state, single(data[2].clone()));
        assert_eq!(keys(&state.selection.selected_rows), vec!["3"]);
        assert_eq!(state.selection.selected_count, 1);

        let state = table_reducer(state, single(data[2].clone()));
        assert_eq!(state.selection.selected_count, 0);
    }

    #[test]
    fn test_select_multiple_rows() {
        let data = rows(4);
        let state = table_reducer(
            state_with(data.clone(), 10),
            TableAction::SelectMultipleRows {
                key_field: KEY.to_string(),
                selected_rows: data.clone(),
                total_rows: 4,
                merge_selections: false,
            },
        );
        assert!(state.selection.all_selected);

        let state = table_reducer(
            state,
            TableAction::SelectMultipleRows {
                key_field: KEY.to_string(),
                selected_rows: vec![data[0].clone()],
                total_rows: 4,
                merge_selections: false,
            },
        );
        assert!(!state.selection.all_selected);
        assert_eq!(state.selection.selected_count, 1);

        let state = table_reducer(
            state,
            TableAction::SelectMultipleRows {
                key_field: KEY.to_string(),
                selected_rows: vec![data[0].clone(), data[3].clone()],
                total_rows: 4,
                merge_selections: true,
            },
        );
        assert_eq!(keys(&state.selection.selected_rows), vec!["1", "4"]);
        assert!(!state.selection.all_selected);
    }

    #[test]
    fn test_sort_asc_then_desc_reverses() {
        let mut data = rows(8);
        data.swap(0, 5);
        data.swap(2, 7);

        let asc = table_reducer(state_with(data, 10), sort_by_name(SortDirection::Asc));
        let desc = table_reducer(asc.clone(), sort_by_name(SortDirection::Desc));

        let mut reversed = keys(&asc.rows);
        reversed.reverse();
        assert_eq!(keys(&desc.rows), reversed);
        assert_eq!(desc.sort.sort_direction, SortDirection::Desc);
        assert!(desc.sort.is_sorted_by("name"));
    }

    #[test]
    fn test_sort_resets_page() {
        let state = table_reducer(state_with(rows(30), 10), change_page(2, 30));
        assert_eq!(state.pagination.current_page, 2);

        let state = table_reducer(state, sort_by_name(SortDirection::Desc));
        assert_eq!(state.pagination.current_page, 0);
    }

    #[test]
    fn test_sort_server_keeps_rows_and_clears_selection() {
        let data = rows(3);
        let state = table_reducer(state_with(data.clone(), 10), select_all(data, false));
        let state = table_reducer(
            state,
            TableAction::SortChange {
                selected_column: Column::new("Name").field("name").sortable(),
                sort_direction: SortDirection::Desc,
                sort_function: None,
                sort_server: true,
                pagination: false,
                pagination_server: false,
                visible_only: false,
                persist_selected_on_sort: false,
            },
        );

        assert_eq!(keys(&state.rows), vec!["1", "2", "3"]);
        assert_eq!(state.selection.selected_count, 0);
    }

    #[test]
    fn test_client_sort_keeps_selection() {
        let data = rows(3);
        let state = table_reducer(state_with(data.clone(), 10), select_one(data[0].clone(), 3));
        let state = table_reducer(state, sort_by_name(SortDirection::Desc));
        assert_eq!(state.selection.selected_count, 1);
    }

    #[test]
    fn test_change_page_is_clamped() {
        for total in 0..35usize {
            for per_page in [1usize, 3, 10] {
                let state = state_with(rows(total as i64), per_page);
                for page in [0usize, 1, 5, 100] {
                    let next = table_reducer(state.clone(), change_page(page, total));
                    let max = number_of_pages(total, per_page).saturating_sub(1);
                    assert!(next.pagination.current_page <= max);
                }
            }
        }
    }

    #[test]
    fn test_change_page_clears_selection_for_server_pages() {
        let data = rows(20);
        let state = table_reducer(state_with(data.clone(), 10), select_one(data[0].clone(), 20));
        let state = table_reducer(
            state,
            TableAction::ChangePage {
                page: 1,
                total_rows: 20,
                pagination_server: true,
                visible_only: false,
                persist_selected_on_page_change: false,
            },
        );
        assert_eq!(state.selection.selected_count, 0);
        assert_eq!(state.pagination.current_page, 1);
    }

    #[test]
    fn test_change_rows_per_page_recalculates_page() {
        let state = table_reducer(state_with(rows(50), 10), change_page(4, 50));
        let state = table_reducer(
            state,
            TableAction::ChangeRowsPerPage {
                rows_per_page: 25,
                page: 4,
                total_rows: 50,
            },
        );

        assert_eq!(state.pagination.rows_per_page, 25);
        assert_eq!(state.pagination.current_page, 1);
    }

    #[test]
    fn test_clear_selected_rows_records_flag_and_flips_marker() {
        let data = rows(2);
        let state = table_reducer(state_with(data.clone(), 10), select_all(data, false));
        let marker = state.toggle_on_selected_rows_change;

        let state = table_reducer(
            state,
            TableAction::ClearSelectedRows {
                selected_rows_flag: true,
            },
        );
        assert!(state.selected_rows_flag);
        assert_ne!(state.toggle_on_selected_rows_change, marker);

        let state = table_reducer(
            state,
            TableAction::ClearSelectedRows {
                selected_rows_flag: false,
            },
        );
        assert!(!state.selected_rows_flag);
    }

    #[test]
    fn test_update_rows_prunes_and_refreshes_selection() {
        let data = rows(4);
        let state = table_reducer(state_with(data.clone(), 10), select_one(data[0].clone(), 4));
        let state = table_reducer(state, select_one(data[3].clone(), 4));

        let fresh: Vec<Record> = vec![
            Record::new().with("id", 1).with("name", "renamed"),
            data[1].clone(),
            data[2].clone(),
        ];
        let state = table_reducer(
            state,
            TableAction::UpdateRows {
                rows: fresh,
                key_field: KEY.to_string(),
                sort_function: None,
                sort_server: false,
                merge_selections: false,
                total_rows: None,
                reset_page: None,
            },
        );

        assert_eq!(state.selection.selected_count, 1);
        assert_eq!(
            state.selection.selected_rows[0].field("name"),
            Some("renamed".into())
        );
    }

    #[test]
    fn test_update_rows_resorts_and_clamps_page() {
        let state = table_reducer(state_with(rows(30), 10), sort_by_name(SortDirection::Desc));
        let state = table_reducer(state, change_page(2, 30));

        let state = table_reducer(
            state,
            TableAction::UpdateRows {
                rows: rows(12),
                key_field: KEY.to_string(),
                sort_function: None,
                sort_server: false,
                merge_selections: false,
                total_rows: None,
                reset_page: None,
            },
        );

        assert_eq!(state.pagination.current_page, 1);
        assert_eq!(state.rows[0].key(KEY), Some("12".to_string()));
    }

    #[test]
    fn test_update_rows_reset_page() {
        let state = table_reducer(state_with(rows(30), 10), change_page(2, 30));
        let state = table_reducer(
            state,
            TableAction::UpdateRows {
                rows: rows(30),
                key_field: KEY.to_string(),
                sort_function: None,
                sort_server: false,
                merge_selections: false,
                total_rows: None,
                reset_page: Some(0),
            },
        );
        assert_eq!(state.pagination.current_page, 0);
    }
}
