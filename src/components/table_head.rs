//! Table head - column names, sort indicators and the select-all checkbox

use super::layout::ColumnGeometry;
use super::table_cell::fit_to_width;
use crate::model::{Column, RowData, SortState, TableStyles};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Tri-state of the select-all checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    None,
    Some,
    All,
}

impl SelectAllState {
    pub fn from_counts(all_selected: bool, selected_count: usize) -> Self {
        if all_selected {
            SelectAllState::All
        } else if selected_count > 0 {
            SelectAllState::Some
        } else {
            SelectAllState::None
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SelectAllState::None => "[ ]",
            SelectAllState::Some => "[-]",
            SelectAllState::All => "[x]",
        }
    }
}

pub struct HeadView<'a, T> {
    pub columns: &'a [&'a Column<T>],
    pub geometry: &'a ColumnGeometry,
    pub sort: &'a SortState<T>,
    pub focused_column: Option<usize>,
    /// `None` hides the select-all checkbox
    pub select_all: Option<SelectAllState>,
    pub styles: &'a TableStyles,
}

/// Label of a column head, with the sort indicator when sorted by it
pub fn head_label<T>(column: &Column<T>, sort: &SortState<T>, width: usize) -> String {
    if !sort.is_sorted_by(&column.id) {
        return fit_to_width(&column.name, width);
    }
    let indicator = sort.sort_direction.indicator();
    let room = width.saturating_sub(indicator.width() + 1);
    format!("{} {}", fit_to_width(&column.name, room), indicator)
}

/// Render the head into a two-line area, returning the click area of each
/// column head and of the select-all checkbox
pub fn render_head<T: RowData>(
    frame: &mut Frame,
    area: Rect,
    view: &HeadView<'_, T>,
) -> (Vec<(Rect, usize)>, Option<Rect>) {
    let styles = view.styles;
    let mut head_hits = Vec::new();

    let select_all_hit = match (view.select_all, view.geometry.checkbox) {
        (Some(state), Some(band)) => {
            let rect = band.rect(area.y, 1);
            frame.render_widget(
                Paragraph::new(state.symbol()).style(styles.checkbox),
                rect,
            );
            Some(rect)
        }
        _ => None,
    };

    for (index, (column, band)) in view.columns.iter().zip(&view.geometry.columns).enumerate() {
        let rect = band.rect(area.y, 1);
        let mut style = if view.sort.is_sorted_by(&column.id) {
            styles.head_active_sort
        } else {
            styles.head
        };
        if view.focused_column == Some(index) {
            style = style.patch(styles.head_focused);
        }

        let label = head_label(column, view.sort, band.width as usize);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(label, style))).alignment(column.align.into()),
            rect,
        );
        if column.can_sort() {
            head_hits.push((rect, index));
        }
    }

    if area.height > 1 {
        render_divider(frame, Rect::new(area.x, area.y + 1, area.width, 1), styles);
    }

    (head_hits, select_all_hit)
}

/// A full-width horizontal rule
pub fn render_divider(frame: &mut Frame, area: Rect, styles: &TableStyles) {
    frame.render_widget(
        Paragraph::new("─".repeat(area.width as usize)).style(styles.divider),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Record, SortDirection};

    #[test]
    fn test_select_all_state() {
        assert_eq!(SelectAllState::from_counts(false, 0), SelectAllState::None);
        assert_eq!(SelectAllState::from_counts(false, 2), SelectAllState::Some);
        assert_eq!(SelectAllState::from_counts(true, 5), SelectAllState::All);
        assert_eq!(SelectAllState::Some.symbol(), "[-]");
    }

    #[test]
    fn test_head_label_shows_direction() {
        let column: Column<Record> = Column::new("Name").id("name").field("name").sortable();
        let other: Column<Record> = Column::new("Age").id("age").field("age").sortable();
        let sort = SortState {
            selected_column: Some(column.clone()),
            sort_direction: SortDirection::Desc,
        };

        assert_eq!(head_label(&column, &sort, 20), "Name ▼");
        assert_eq!(head_label(&other, &sort, 20), "Age");
    }

    #[test]
    fn test_head_label_truncates_before_indicator() {
        let column: Column<Record> = Column::new("Description").id("d").field("d").sortable();
        let sort = SortState {
            selected_column: Some(column.clone()),
            sort_direction: SortDirection::Asc,
        };

        assert_eq!(head_label(&column, &sort, 8), "Descr… ▲");
    }
}
