//! Row sorting
//!
//! All sorting goes through `slice::sort_by`, which is stable: rows that
//! compare equal keep their original relative order in both directions.

use super::column::Column;
use super::record::{CellValue, RowData};
use super::state::SortDirection;
use std::cmp::Ordering;
use std::rc::Rc;

/// Table-level sort that replaces the built-in one entirely
pub type SortFunction<T> = Rc<dyn Fn(Vec<T>, &Column<T>, SortDirection) -> Vec<T>>;

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Sort `rows` by `column`
///
/// Precedence: the table-level `sort_function`, then the column's own
/// comparator, then its selector values. A column with none of these leaves
/// the order untouched.
pub fn sort_rows<T: RowData>(
    rows: Vec<T>,
    column: &Column<T>,
    direction: SortDirection,
    sort_function: Option<&SortFunction<T>>,
) -> Vec<T> {
    if let Some(sort) = sort_function {
        return sort(rows, column, direction);
    }

    if let Some(compare) = &column.sort_function {
        let mut rows = rows;
        rows.sort_by(|a, b| directed(compare(a, b), direction));
        return rows;
    }

    if column.selector.is_none() {
        return rows;
    }

    // Read every value once; selectors may be arbitrary closures
    let mut keyed: Vec<(CellValue, T)> = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| (column.value(&row, index), row))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| directed(a.compare(b), direction));
    keyed.into_iter().map(|(_, row)| row).collect()
}
