//! Row identity helpers for selection bookkeeping

use super::record::RowData;

/// Whether `a` and `b` are the same row under `key_field`
///
/// Rows with a key compare by key. A row without one falls back to
/// whole-row equality.
pub fn is_same_row<T: RowData>(a: &T, b: &T, key_field: &str) -> bool {
    match a.key(key_field) {
        Some(key) => b.key(key_field).as_deref() == Some(key.as_str()),
        None => a == b,
    }
}

pub fn is_row_selected<T: RowData>(row: &T, selected_rows: &[T], key_field: &str) -> bool {
    selected_rows
        .iter()
        .any(|selected| is_same_row(row, selected, key_field))
}

pub fn insert_row<T>(mut selected_rows: Vec<T>, row: T) -> Vec<T> {
    selected_rows.push(row);
    selected_rows
}

pub fn remove_row<T: RowData>(selected_rows: Vec<T>, row: &T, key_field: &str) -> Vec<T> {
    selected_rows
        .into_iter()
        .filter(|selected| !is_same_row(row, selected, key_field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::Record;

    #[test]
    fn test_rows_compare_by_key() {
        let a = Record::new().with("id", 1).with("name", "old");
        let b = Record::new().with("id", 1).with("name", "new");
        let c = Record::new().with("id", 2).with("name", "old");

        assert!(is_same_row(&a, &b, "id"));
        assert!(!is_same_row(&a, &c, "id"));
    }

    #[test]
    fn test_keyless_rows_compare_by_value() {
        let a = Record::new().with("name", "x");
        let b = Record::new().with("name", "x");
        let c = Record::new().with("name", "y");

        assert!(is_same_row(&a, &b, "id"));
        assert!(!is_same_row(&a, &c, "id"));
    }

    #[test]
    fn test_remove_row_by_key() {
        let rows = vec![
            Record::new().with("id", 1),
            Record::new().with("id", 2),
            Record::new().with("id", 3),
        ];
        let remaining = remove_row(rows, &Record::new().with("id", 2), "id");

        assert_eq!(remaining.len(), 2);
        assert!(!is_row_selected(&Record::new().with("id", 2), &remaining, "id"));
    }
}
