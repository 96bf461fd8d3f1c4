//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that owns the data table, the event log and the modal dialogs. It handles
//! app-level keys and forwards everything else to the table.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, draw_event_panel, draw_help_bar, DataTable, HelpDialog, QuitDialog,
};
use crate::config::Config;
use crate::model::{
    CellValue, EventLog, ExpandedContent, Modal, ModalStack, PaginationOptions, Record, RowData,
    TableCallbacks, TableProps,
};
use crate::services::{infer_columns, load_rows};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

// ═══════════════════════════════════════════════════════════════════════════════
// Table Construction
// ═══════════════════════════════════════════════════════════════════════════════

/// Build the table for a loaded file from the effective config
///
/// Table callbacks write to `events` so the viewer can show what the table
/// reported.
pub fn build_table(
    config: &Config,
    rows: Vec<Record>,
    events: Rc<RefCell<EventLog>>,
) -> Result<DataTable<Record>> {
    let columns = infer_columns(&rows);
    let props = TableProps {
        key_field: config.key_field.clone(),
        title: config.title.clone(),
        dense: config.dense,
        striped: config.striped,
        highlight_on_hover: config.highlight_on_hover,
        conditional_row_styles: config.compile_row_styles()?,
        selectable_rows: config.selectable_rows,
        selectable_rows_single: config.single_select,
        selectable_rows_highlight: config.selectable_rows_highlight,
        selectable_rows_visible_only: config.visible_only,
        expandable_rows: config.expandable_rows,
        expand_on_row_clicked: config.expand_on_row_clicked,
        expandable_rows_component: config
            .expandable_rows
            .then(|| Rc::new(expanded_fields) as ExpandedContent<Record>),
        pagination: config.pagination,
        pagination_per_page: config.rows_per_page.max(1),
        pagination_rows_per_page_options: config.rows_per_page_options.clone(),
        pagination_options: PaginationOptions {
            select_all_rows_item: config.all_rows_option,
            ..PaginationOptions::default()
        },
        default_sort_field_id: config.default_sort_field.clone(),
        default_sort_asc: config.default_sort_asc,
        ..TableProps::default()
    };

    Ok(DataTable::new(columns, rows)
        .with_props(props)
        .with_callbacks(event_callbacks(&config.key_field, events)))
}

/// Every field of an expanded row, one per line
fn expanded_fields(row: &Record) -> Vec<Line<'static>> {
    row.iter()
        .map(|(key, value)| {
            Line::from(vec![
                Span::styled(format!("{}: ", key), Style::default().fg(Color::Cyan)),
                Span::raw(CellValue::from(value).to_string()),
            ])
        })
        .collect()
}

fn row_label(row: &Record, key_field: &str) -> String {
    row.key(key_field)
        .map(|key| format!("{} {}", key_field, key))
        .unwrap_or_else(|| "row".to_string())
}

fn event_callbacks(key_field: &str, events: Rc<RefCell<EventLog>>) -> TableCallbacks<Record> {
    let record = move |events: &Rc<RefCell<EventLog>>, message: String| {
        log::trace!("table event: {}", message);
        events.borrow_mut().push(message);
    };

    let sort_events = events.clone();
    let page_events = events.clone();
    let per_page_events = events.clone();
    let selection_events = events.clone();
    let click_events = events.clone();
    let double_click_events = events.clone();
    let expand_events = events;

    let click_key = key_field.to_string();
    let double_click_key = key_field.to_string();
    let expand_key = key_field.to_string();

    TableCallbacks::<Record>::new()
        .on_sort(move |column, direction| {
            record(&sort_events, format!("Sorted by {} {}", column.name, direction));
        })
        .on_change_page(move |page, total_rows| {
            record(&page_events, format!("Page {} ({} rows)", page + 1, total_rows));
        })
        .on_change_rows_per_page(move |rows_per_page, page| {
            record(
                &per_page_events,
                format!("{} rows per page, page {}", rows_per_page, page + 1),
            );
        })
        .on_selected_rows_change(move |selection| {
            let message = if selection.all_selected {
                format!("All {} rows selected", selection.selected_count)
            } else {
                format!("{} rows selected", selection.selected_count)
            };
            record(&selection_events, message);
        })
        .on_row_clicked(move |row| {
            record(&click_events, format!("Clicked {}", row_label(row, &click_key)));
        })
        .on_row_double_clicked(move |row| {
            record(
                &double_click_events,
                format!("Double clicked {}", row_label(row, &double_click_key)),
            );
        })
        .on_row_expand_toggled(move |expanded, row| {
            let verb = if expanded { "Expanded" } else { "Collapsed" };
            record(&expand_events, format!("{} {}", verb, row_label(row, &expand_key)));
        })
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Data file the rows were loaded from
    pub source: PathBuf,

    /// Effective settings for this run
    pub config: Config,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Callback messages reported by the table
    pub events: Rc<RefCell<EventLog>>,

    /// Whether the event log panel is shown
    pub show_event_log: bool,

    /// Caller-side clear-selection toggle handed to the table
    pub clear_flag: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub table: DataTable<Record>,
    pub help_dialog: HelpDialog,
    pub quit_dialog: QuitDialog,
}

impl App {
    pub fn new(config: Config, source: PathBuf, rows: Vec<Record>) -> Result<Self> {
        let events = Rc::new(RefCell::new(EventLog::new()));
        let table = build_table(&config, rows, events.clone())?;

        Ok(Self {
            source,
            config,
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            events,
            show_event_log: false,
            clear_flag: false,
            table,
            help_dialog: HelpDialog::default(),
            quit_dialog: QuitDialog::default(),
        })
    }

    fn source_name(&self) -> String {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }

    /// Re-read the data file; the table keeps its columns and settings
    fn reload(&mut self) {
        match load_rows(&self.source) {
            Ok(rows) => {
                let count = rows.len();
                self.table.set_data(rows);
                self.error = None;
                self.events
                    .borrow_mut()
                    .push(format!("Reloaded {} rows", count));
            }
            Err(e) => {
                log::warn!("Reload of {} failed: {}", self.source.display(), e);
                self.error = Some(e.to_string());
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ForceQuit)
            }
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('c') => Some(Action::ClearSelectedRows),
            KeyCode::Char('r') => Some(Action::ReloadData),
            KeyCode::Char('L') => Some(Action::ToggleEventLog),
            KeyCode::Esc if self.error.is_some() => {
                self.error = None;
                None
            }
            _ => return self.table.handle_key_event(key),
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }
        self.table.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.quit_dialog.selected_rows = self.table.state().selection.selected_count;
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Data
            // ─────────────────────────────────────────────────────────────────
            Action::ReloadData => self.reload(),
            Action::ToggleEventLog => {
                self.show_event_log = !self.show_event_log;
            }
            Action::ClearSelectedRows => {
                self.clear_flag = !self.clear_flag;
                self.table.clear_selected_rows(self.clear_flag);
            }

            // Everything else belongs to the table
            other => return self.table.update(other),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area, self.show_event_log);

        self.table.draw(frame, layout.table)?;
        if let Some(events_area) = layout.events {
            draw_event_panel(frame, events_area, &self.events.borrow());
        }
        let source = self.source_name();
        draw_help_bar(frame, layout.help, self.error.as_deref(), &source);

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
        }
    }
}
