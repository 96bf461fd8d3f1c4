//! Default styles for the table's parts

use ratatui::style::{Color, Modifier, Style};

/// Styles for every part of the table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStyles {
    pub header: Style,
    pub context: Style,
    pub sub_header: Style,
    pub head: Style,
    pub head_active_sort: Style,
    pub head_focused: Style,
    pub row: Style,
    pub row_dense: Style,
    pub row_striped: Style,
    pub row_highlight: Style,
    pub row_selected: Style,
    pub divider: Style,
    pub checkbox: Style,
    pub checkbox_disabled: Style,
    pub expander: Style,
    pub expander_row: Style,
    pub pagination: Style,
    pub pagination_button: Style,
    pub pagination_button_disabled: Style,
    pub no_data: Style,
    pub progress: Style,
}

impl Default for TableStyles {
    fn default() -> Self {
        Self {
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            context: Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
            sub_header: Style::default().fg(Color::Gray),
            head: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            head_active_sort: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            head_focused: Style::default().add_modifier(Modifier::UNDERLINED),
            row: Style::default().fg(Color::White),
            row_dense: Style::default(),
            row_striped: Style::default().bg(Color::Rgb(30, 30, 38)),
            row_highlight: Style::default().bg(Color::Blue).fg(Color::White),
            row_selected: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            divider: Style::default().fg(Color::DarkGray),
            checkbox: Style::default().fg(Color::Green),
            checkbox_disabled: Style::default().fg(Color::DarkGray),
            expander: Style::default().fg(Color::Yellow),
            expander_row: Style::default().fg(Color::Gray),
            pagination: Style::default().fg(Color::Gray),
            pagination_button: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            pagination_button_disabled: Style::default().fg(Color::DarkGray),
            no_data: Style::default().fg(Color::Yellow),
            progress: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        }
    }
}
