//! Table cell - renders one column's value for one row

use crate::model::{get_conditional_style, Column, RowData};
use ratatui::{layout::Rect, style::Style, text::Line, widgets::Paragraph, Frame};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "…";

/// Shorten `text` to `width` cells, ending in an ellipsis when cut
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ELLIPSIS);
    out
}

/// Text of a cell: custom cell, then format, then the selector value
pub fn cell_line<T: RowData>(column: &Column<T>, row: &T, row_index: usize) -> Line<'static> {
    if let Some(cell) = &column.cell {
        return cell(row, row_index, column);
    }
    if let Some(format) = &column.format {
        return Line::from(format(row, row_index));
    }
    Line::from(column.value(row, row_index).to_string())
}

/// Column style with its matching conditional cell style on top
pub fn cell_style<T>(column: &Column<T>, row: &T) -> Style {
    column
        .style
        .patch(get_conditional_style(row, &column.conditional_cell_styles))
}

pub fn render_cell<T: RowData>(
    frame: &mut Frame,
    area: Rect,
    column: &Column<T>,
    row: &T,
    row_index: usize,
    base: Style,
) {
    let mut line = cell_line(column, row, row_index);
    // Custom cells manage their own width
    if column.cell.is_none() && !column.wrap {
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        line = Line::from(fit_to_width(&text, area.width as usize));
    }

    let paragraph = Paragraph::new(line)
        .style(base.patch(cell_style(column, row)))
        .alignment(column.align.into());
    frame.render_widget(paragraph, area);
}
