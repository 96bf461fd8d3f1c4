//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.
//!
//! `DataTable` is assembled from the leaf views: header, head, rows with their
//! cells and expanded bodies, and the pagination bar.

pub mod data_table;
pub mod event_panel;
pub mod help_dialog;
pub mod layout;
pub mod pagination_bar;
pub mod quit_dialog;
pub mod table_cell;
pub mod table_head;
pub mod table_header;
pub mod table_row;

pub use data_table::DataTable;
pub use event_panel::{draw_event_panel, draw_help_bar};
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
