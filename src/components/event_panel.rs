//! Event log panel and the bottom help bar

use crate::model::EventLog;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Most recent events, newest last
pub fn draw_event_panel(frame: &mut Frame, area: Rect, events: &EventLog) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = events
        .recent(visible)
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", entry.formatted_time()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(entry.message.clone(), Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Events ({}) ", events.len()))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

/// Key hints, or the last error when there is one
pub fn draw_help_bar(frame: &mut Frame, area: Rect, error: Option<&str>, source: &str) {
    let key = |text: &str, color: Color| {
        Span::styled(
            format!(" {} ", text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    };

    let spans = if let Some(error) = error {
        vec![Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        )]
    } else {
        vec![
            Span::styled(
                format!(" {} ", source),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            key("q", Color::Yellow),
            Span::raw("Quit "),
            key("Space", Color::Green),
            Span::raw("Select "),
            key("s", Color::Cyan),
            Span::raw("Sort "),
            key("e", Color::Cyan),
            Span::raw("Expand "),
            key("[ ]", Color::Cyan),
            Span::raw("Page "),
            key("L", Color::Magenta),
            Span::raw("Events "),
            key("?", Color::White),
            Span::raw("Help"),
        ]
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
