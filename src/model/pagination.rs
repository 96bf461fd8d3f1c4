//! Page arithmetic
//!
//! Pages are zero-based. The valid range for a table of `n` rows is
//! `[0, ceil(n / rows_per_page) - 1]`; an empty table only has page 0.

use std::ops::Range;

pub fn number_of_pages(row_count: usize, rows_per_page: usize) -> usize {
    row_count.div_ceil(rows_per_page.max(1))
}

pub fn last_page(row_count: usize, rows_per_page: usize) -> usize {
    number_of_pages(row_count, rows_per_page).saturating_sub(1)
}

pub fn clamp_page(page: usize, row_count: usize, rows_per_page: usize) -> usize {
    page.min(last_page(row_count, rows_per_page))
}

/// Index range `[page * size, page * size + size)` cut to the row count
pub fn page_bounds(page: usize, rows_per_page: usize, row_count: usize) -> Range<usize> {
    let size = rows_per_page.max(1);
    let start = page.saturating_mul(size).min(row_count);
    let end = start.saturating_add(size).min(row_count);
    start..end
}

pub fn page_slice<T>(rows: &[T], page: usize, rows_per_page: usize) -> &[T] {
    &rows[page_bounds(page, rows_per_page, rows.len())]
}

/// "11-20 of 42" style range label
pub fn range_label(page: usize, rows_per_page: usize, row_count: usize, separator: &str) -> String {
    let bounds = page_bounds(page, rows_per_page, row_count);
    if bounds.is_empty() {
        return format!("0-0 {} {}", separator, row_count);
    }
    format!("{}-{} {} {}", bounds.start + 1, bounds.end, separator, row_count)
}
