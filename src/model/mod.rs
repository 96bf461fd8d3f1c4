//! Model layer - table data and state management
//!
//! - `record` / `column` - what rows are and how columns read them
//! - `state` / `reducer` - selection, sort and pagination state machine
//! - `props` / `callbacks` - caller configuration and upward reporting
//! - `modal` / `event_log` - viewer-side state

pub mod callbacks;
pub mod column;
pub mod conditional;
pub mod event_log;
pub mod modal;
pub mod pagination;
pub mod props;
pub mod record;
pub mod reducer;
pub mod selection;
pub mod sort;
pub mod state;
pub mod styles;

// Re-export commonly used types
pub use callbacks::TableCallbacks;
pub use column::{decorate_columns, Alignment, Column, ColumnId, Selector};
pub use conditional::{get_conditional_style, ConditionalStyle, RowPredicate};
pub use event_log::{EventLog, EventLogEntry};
pub use modal::{Modal, ModalStack};
pub use props::{ContextMessage, ExpandedContent, PaginationOptions, PaginationServerOptions, TableProps};
pub use record::{CellValue, Record, RowData};
pub use reducer::{table_reducer, TableAction};
pub use sort::{sort_rows, SortFunction};
pub use state::{PaginationState, SelectionState, SortDirection, SortState, TableState};
pub use styles::TableStyles;
