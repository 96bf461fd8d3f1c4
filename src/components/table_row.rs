//! Table row - checkbox, expander, cells and the expanded body of one row

use super::layout::ColumnGeometry;
use super::table_cell::render_cell;
use crate::model::{get_conditional_style, Column, RowData, TableProps};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

const EXPANDER_INDENT: u16 = 2;

/// Per-row flags resolved by the table before rendering
pub struct RowView<'a, T> {
    pub row: &'a T,
    /// Position in the current view
    pub row_index: usize,
    pub selected: bool,
    pub selectable: bool,
    pub focused: bool,
    pub expanded: bool,
    pub expandable: bool,
}

/// Style of a whole row, before cell styles
pub fn row_style<T>(props: &TableProps<T>, view: &RowView<'_, T>) -> Style {
    let styles = &props.styles;
    let mut style = styles.row;
    if props.dense {
        style = style.patch(styles.row_dense);
    }
    if props.striped && view.row_index % 2 == 1 {
        style = style.patch(styles.row_striped);
    }
    if view.focused {
        style = if props.highlight_on_hover {
            style.patch(styles.row_highlight)
        } else {
            style.add_modifier(Modifier::BOLD)
        };
    }
    if view.selected && props.selectable_rows_highlight {
        style = style.patch(styles.row_selected);
    }
    if props.disabled {
        style = style.add_modifier(Modifier::DIM);
    }
    style.patch(get_conditional_style(view.row, &props.conditional_row_styles))
}

pub fn checkbox_symbol(selected: bool, selectable: bool) -> &'static str {
    match (selectable, selected) {
        (false, _) => "[-]",
        (true, true) => "[x]",
        (true, false) => "[ ]",
    }
}

pub fn expander_symbol(expanded: bool) -> &'static str {
    if expanded {
        "▾"
    } else {
        "▸"
    }
}

/// Render one row line
pub fn render_row<T: RowData>(
    frame: &mut Frame,
    area: Rect,
    props: &TableProps<T>,
    columns: &[&Column<T>],
    geometry: &ColumnGeometry,
    view: &RowView<'_, T>,
) {
    let styles = &props.styles;
    let style = row_style(props, view);
    frame.render_widget(Paragraph::new("").style(style), area);

    if let Some(band) = geometry.checkbox {
        let checkbox_style = if view.selectable {
            styles.checkbox
        } else {
            styles.checkbox_disabled
        };
        frame.render_widget(
            Paragraph::new(checkbox_symbol(view.selected, view.selectable))
                .style(style.patch(checkbox_style)),
            band.rect(area.y, 1),
        );
    }

    if let Some(band) = geometry.expander {
        let symbol = if view.expandable {
            expander_symbol(view.expanded)
        } else {
            " "
        };
        frame.render_widget(
            Paragraph::new(symbol).style(style.patch(styles.expander)),
            band.rect(area.y, 1),
        );
    }

    for (column, band) in columns.iter().zip(&geometry.columns) {
        render_cell(frame, band.rect(area.y, 1), column, view.row, view.row_index, style);
    }
}

/// Body lines of an expanded row
pub fn expander_lines<T>(props: &TableProps<T>, row: &T) -> Vec<Line<'static>> {
    props
        .expandable_rows_component
        .as_ref()
        .map(|component| component(row))
        .unwrap_or_default()
}

/// Render the expanded body below its row
pub fn render_expander_row<T>(
    frame: &mut Frame,
    area: Rect,
    props: &TableProps<T>,
    row: &T,
    lines: Vec<Line<'static>>,
) {
    let mut style = props.styles.expander_row;
    if props.expandable_inherit_conditional_styles {
        style = style.patch(get_conditional_style(row, &props.conditional_row_styles));
    }

    let inner = Rect::new(
        area.x.saturating_add(EXPANDER_INDENT).min(area.right()),
        area.y,
        area.width.saturating_sub(EXPANDER_INDENT),
        area.height,
    );
    frame.render_widget(Paragraph::new("").style(style), area);
    frame.render_widget(Paragraph::new(lines).style(style), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConditionalStyle, Record};
    use ratatui::style::Color;
    use std::rc::Rc;

    fn view(row: &Record) -> RowView<'_, Record> {
        RowView {
            row,
            row_index: 0,
            selected: false,
            selectable: true,
            focused: false,
            expanded: false,
            expandable: false,
        }
    }

    #[test]
    fn test_checkbox_symbols() {
        assert_eq!(checkbox_symbol(true, true), "[x]");
        assert_eq!(checkbox_symbol(false, true), "[ ]");
        assert_eq!(checkbox_symbol(true, false), "[-]");
    }

    #[test]
    fn test_striped_rows_alternate() {
        let props: TableProps<Record> = TableProps {
            striped: true,
            ..TableProps::default()
        };
        let row = Record::new();
        let even = view(&row);
        let odd = RowView {
            row_index: 1,
            ..view(&row)
        };

        assert_eq!(row_style(&props, &even).bg, props.styles.row.bg);
        assert_eq!(row_style(&props, &odd).bg, props.styles.row_striped.bg);
    }

    #[test]
    fn test_focused_row_highlight() {
        let props: TableProps<Record> = TableProps::default();
        let row = Record::new();
        let focused = RowView {
            focused: true,
            ..view(&row)
        };

        assert_eq!(row_style(&props, &focused).bg, Some(Color::Blue));
    }

    #[test]
    fn test_selected_highlight_needs_flag() {
        let row = Record::new();
        let selected = RowView {
            selected: true,
            ..view(&row)
        };
        let plain: TableProps<Record> = TableProps::default();
        let highlighted: TableProps<Record> = TableProps {
            selectable_rows_highlight: true,
            ..TableProps::default()
        };

        assert_eq!(row_style(&plain, &selected).fg, Some(Color::White));
        assert_eq!(row_style(&highlighted, &selected).fg, Some(Color::Green));
    }

    #[test]
    fn test_conditional_row_style_applies_last() {
        let props: TableProps<Record> = TableProps {
            selectable_rows_highlight: true,
            conditional_row_styles: vec![ConditionalStyle::new(
                |row: &Record| row.get("overdue").is_some(),
                Style::default().fg(Color::Red),
            )],
            ..TableProps::default()
        };
        let row = Record::new().with("overdue", true);
        let selected = RowView {
            selected: true,
            ..view(&row)
        };

        assert_eq!(row_style(&props, &selected).fg, Some(Color::Red));
    }

    #[test]
    fn test_expander_lines_from_component() {
        let props: TableProps<Record> = TableProps {
            expandable_rows: true,
            expandable_rows_component: Some(Rc::new(|row: &Record| {
                row.keys().map(|key| Line::from(key.clone())).collect()
            })),
            ..TableProps::default()
        };
        let row = Record::new().with("a", 1).with("b", 2);

        assert_eq!(expander_lines(&props, &row).len(), 2);
        assert!(expander_lines(&TableProps::default(), &row).is_empty());
    }
}
