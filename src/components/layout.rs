//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub table: Rect,
    pub events: Option<Rect>,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Whether the cell at (`column`, `row`) lies inside `rect`
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Calculate main screen layout: table, optional event log, help bar
pub fn calculate_main_layout(area: Rect, show_event_log: bool) -> MainLayout {
    if show_event_log {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(7),
                Constraint::Length(1),
            ])
            .split(area);
        MainLayout {
            table: chunks[0],
            events: Some(chunks[1]),
            help: chunks[2],
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        MainLayout {
            table: chunks[0],
            events: None,
            help: chunks[1],
        }
    }
}

/// Areas of a single table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub header: Option<Rect>,
    pub sub_header: Option<Rect>,
    /// Column names plus a divider line
    pub head: Option<Rect>,
    pub body: Rect,
    pub pagination: Option<Rect>,
}

/// Split a table area top to bottom
pub fn calculate_table_layout(
    area: Rect,
    show_header: bool,
    show_sub_header: bool,
    show_head: bool,
    show_pagination: bool,
) -> TableLayout {
    let parts = [
        (show_header, Constraint::Length(1)),
        (show_sub_header, Constraint::Length(1)),
        (show_head, Constraint::Length(2)),
        (true, Constraint::Min(0)),
        (show_pagination, Constraint::Length(1)),
    ];
    let constraints: Vec<Constraint> = parts
        .iter()
        .filter(|(shown, _)| *shown)
        .map(|(_, constraint)| *constraint)
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut chunk = chunks.iter().copied();
    let mut take = |shown: bool| if shown { chunk.next() } else { None };

    let header = take(show_header);
    let sub_header = take(show_sub_header);
    let head = take(show_head);
    let body = take(true).unwrap_or(area);
    let pagination = take(show_pagination);

    TableLayout {
        header,
        sub_header,
        head,
        body,
        pagination,
    }
}

/// Horizontal extent of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub x: u16,
    pub width: u16,
}

impl Band {
    pub fn rect(&self, y: u16, height: u16) -> Rect {
        Rect::new(self.x, y, self.width, height)
    }
}

/// Column positions shared by the head and every row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnGeometry {
    pub checkbox: Option<Band>,
    pub expander: Option<Band>,
    pub columns: Vec<Band>,
}

const CHECKBOX_WIDTH: u16 = 3;
const EXPANDER_WIDTH: u16 = 1;
const GAP: u16 = 1;

/// Lay out the checkbox cell, the expander cell and the data columns
pub fn calculate_column_geometry(
    area: Rect,
    checkbox: bool,
    expander: bool,
    constraints: &[Constraint],
) -> ColumnGeometry {
    let mut x = area.x;
    let right = area.right();
    let mut fixed = |shown: bool, width: u16| {
        if !shown || x >= right {
            return None;
        }
        let band = Band {
            x,
            width: width.min(right - x),
        };
        x = x.saturating_add(width + GAP).min(right);
        Some(band)
    };

    let checkbox = fixed(checkbox, CHECKBOX_WIDTH);
    let expander = fixed(expander, EXPANDER_WIDTH);

    let rest = Rect::new(x, area.y, right.saturating_sub(x), area.height);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints.to_vec())
        .spacing(GAP)
        .split(rest)
        .iter()
        .map(|rect| Band {
            x: rect.x,
            width: rect.width,
        })
        .collect();

    ColumnGeometry {
        checkbox,
        expander,
        columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_popup(area, 40, 10), Rect::new(30, 15, 40, 10));
        assert_eq!(centered_popup(area, 200, 80), Rect::new(0, 0, 100, 40));
    }

    #[test]
    fn test_contains() {
        let rect = Rect::new(5, 5, 3, 2);
        assert!(contains(rect, 5, 5));
        assert!(contains(rect, 7, 6));
        assert!(!contains(rect, 8, 5));
        assert!(!contains(rect, 5, 7));
    }

    #[test]
    fn test_table_layout_all_parts() {
        let layout = calculate_table_layout(Rect::new(0, 0, 80, 20), true, true, true, true);

        assert_eq!(layout.header, Some(Rect::new(0, 0, 80, 1)));
        assert_eq!(layout.sub_header, Some(Rect::new(0, 1, 80, 1)));
        assert_eq!(layout.head, Some(Rect::new(0, 2, 80, 2)));
        assert_eq!(layout.body, Rect::new(0, 4, 80, 15));
        assert_eq!(layout.pagination, Some(Rect::new(0, 19, 80, 1)));
    }

    #[test]
    fn test_table_layout_body_only() {
        let area = Rect::new(0, 0, 80, 20);
        let layout = calculate_table_layout(area, false, false, false, false);

        assert_eq!(layout.body, area);
        assert!(layout.header.is_none());
        assert!(layout.head.is_none());
        assert!(layout.pagination.is_none());
    }

    #[test]
    fn test_column_geometry_prefix_cells() {
        let geometry = calculate_column_geometry(
            Rect::new(0, 0, 40, 1),
            true,
            true,
            &[Constraint::Length(10), Constraint::Fill(1)],
        );

        assert_eq!(geometry.checkbox, Some(Band { x: 0, width: 3 }));
        assert_eq!(geometry.expander, Some(Band { x: 4, width: 1 }));
        assert_eq!(geometry.columns[0], Band { x: 6, width: 10 });
        assert_eq!(geometry.columns[1], Band { x: 17, width: 23 });
    }

    #[test]
    fn test_column_geometry_without_prefix() {
        let geometry =
            calculate_column_geometry(Rect::new(2, 0, 20, 1), false, false, &[Constraint::Fill(1)]);

        assert!(geometry.checkbox.is_none());
        assert!(geometry.expander.is_none());
        assert_eq!(geometry.columns, vec![Band { x: 2, width: 20 }]);
    }
}
