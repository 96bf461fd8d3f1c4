//! Pagination bar - rows-per-page picker, range label and page buttons

use crate::model::pagination::{number_of_pages, range_label};
use crate::model::{PaginationOptions, TableStyles};
use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    First,
    Prev,
    Next,
    Last,
}

/// Clickable parts of the bar from the last render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationHits {
    pub buttons: Vec<(Rect, PageButton)>,
    pub rows_per_page: Option<Rect>,
}

pub struct PaginationView<'a> {
    pub current_page: usize,
    pub rows_per_page: usize,
    pub total_rows: usize,
    pub options: &'a PaginationOptions,
}

#[derive(Debug, Clone, Copy)]
enum Target {
    RowsPerPage,
    Button(PageButton),
}

struct Segment {
    text: String,
    style: Style,
    target: Option<Target>,
}

impl Segment {
    fn plain(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            target: None,
        }
    }
}

fn segments(view: &PaginationView<'_>, styles: &TableStyles) -> Vec<Segment> {
    let options = view.options;
    let pages = number_of_pages(view.total_rows, view.rows_per_page).max(1);
    let page = view.current_page;
    let mut out = Vec::new();

    if !options.no_rows_per_page {
        let shows_all = options.select_all_rows_item
            && view.total_rows > 0
            && view.rows_per_page >= view.total_rows;
        let label = if shows_all {
            options.select_all_rows_item_text.clone()
        } else {
            view.rows_per_page.to_string()
        };
        out.push(Segment::plain(
            format!("{} ", options.rows_per_page_text),
            styles.pagination,
        ));
        out.push(Segment {
            text: format!("[{} ▾]", label),
            style: styles.pagination_button,
            target: Some(Target::RowsPerPage),
        });
        out.push(Segment::plain("   ", styles.pagination));
    }

    out.push(Segment::plain(
        range_label(
            page,
            view.rows_per_page,
            view.total_rows,
            &options.range_separator_text,
        ),
        styles.pagination,
    ));
    out.push(Segment::plain("   ", styles.pagination));

    let has_prev = page > 0;
    let has_next = page + 1 < pages;
    let button = |text: &str, button: PageButton, enabled: bool| Segment {
        text: text.to_string(),
        style: if enabled {
            styles.pagination_button
        } else {
            styles.pagination_button_disabled
        },
        target: enabled.then_some(Target::Button(button)),
    };

    out.push(button("|<", PageButton::First, has_prev));
    out.push(Segment::plain(" ", styles.pagination));
    out.push(button("<", PageButton::Prev, has_prev));
    out.push(Segment::plain(
        format!(" {}/{} ", page + 1, pages),
        styles.pagination,
    ));
    out.push(button(">", PageButton::Next, has_next));
    out.push(Segment::plain(" ", styles.pagination));
    out.push(button(">|", PageButton::Last, has_next));
    out.push(Segment::plain(" ", styles.pagination));
    out
}

/// Render the bar right-aligned in `area`
pub fn render_pagination(
    frame: &mut Frame,
    area: Rect,
    view: &PaginationView<'_>,
    styles: &TableStyles,
) -> PaginationHits {
    let segments = segments(view, styles);
    let total_width: u16 = segments.iter().map(|s| s.text.width() as u16).sum();
    let mut x = area.right().saturating_sub(total_width).max(area.x);
    let mut hits = PaginationHits::default();

    frame.render_widget(Paragraph::new("").style(styles.pagination), area);
    for segment in segments {
        if x >= area.right() {
            break;
        }
        let width = (segment.text.width() as u16).min(area.right() - x);
        let rect = Rect::new(x, area.y, width, 1);
        frame.render_widget(Paragraph::new(Span::styled(segment.text, segment.style)), rect);

        match segment.target {
            Some(Target::RowsPerPage) => hits.rows_per_page = Some(rect),
            Some(Target::Button(button)) => hits.buttons.push((rect, button)),
            None => {}
        }
        x += width;
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::buffer_lines;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(view: &PaginationView<'_>) -> (Vec<String>, PaginationHits) {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        let mut hits = PaginationHits::default();
        terminal
            .draw(|frame| {
                hits = render_pagination(frame, frame.area(), view, &TableStyles::default());
            })
            .unwrap();
        (buffer_lines(terminal.backend().buffer()), hits)
    }

    #[test]
    fn test_first_page_disables_back_buttons() {
        let options = PaginationOptions::default();
        let (lines, hits) = render(&PaginationView {
            current_page: 0,
            rows_per_page: 10,
            total_rows: 42,
            options: &options,
        });

        assert!(lines[0].contains("Rows per page: [10 ▾]"));
        assert!(lines[0].contains("1-10 of 42"));
        assert!(lines[0].contains("1/5"));
        let buttons: Vec<PageButton> = hits.buttons.iter().map(|(_, b)| *b).collect();
        assert_eq!(buttons, vec![PageButton::Next, PageButton::Last]);
        assert!(hits.rows_per_page.is_some());
    }

    #[test]
    fn test_last_page_range() {
        let options = PaginationOptions {
            no_rows_per_page: true,
            ..PaginationOptions::default()
        };
        let (lines, hits) = render(&PaginationView {
            current_page: 4,
            rows_per_page: 10,
            total_rows: 42,
            options: &options,
        });

        assert!(lines[0].contains("41-42 of 42"));
        assert!(!lines[0].contains("Rows per page"));
        let buttons: Vec<PageButton> = hits.buttons.iter().map(|(_, b)| *b).collect();
        assert_eq!(buttons, vec![PageButton::First, PageButton::Prev]);
        assert!(hits.rows_per_page.is_none());
    }

    #[test]
    fn test_all_rows_item_label() {
        let options = PaginationOptions {
            select_all_rows_item: true,
            ..PaginationOptions::default()
        };
        let (lines, _) = render(&PaginationView {
            current_page: 0,
            rows_per_page: 42,
            total_rows: 42,
            options: &options,
        });

        assert!(lines[0].contains("[All ▾]"));
    }
}
