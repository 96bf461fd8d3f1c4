//! Action enum - All possible user intents
//!
//! Components emit Actions in response to key and mouse events. The table
//! turns its own Actions into reducer actions; the App handles the rest.
//! Index-carrying variants address rows and columns of the current view.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Quit without confirmation
    ForceQuit,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Re-read the data file and hand the rows to the table
    ReloadData,
    /// Show or hide the event log panel
    ToggleEventLog,
    /// Flip the caller-side clear-selection toggle
    ClearSelectedRows,

    // ─────────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────────
    FocusNextRow,
    FocusPrevRow,
    FocusFirstRow,
    FocusLastRow,
    FocusNextColumn,
    FocusPrevColumn,

    // ─────────────────────────────────────────────────────────────────────────
    // Rows
    // ─────────────────────────────────────────────────────────────────────────
    ToggleRowSelection(usize),
    ToggleAllRows,
    ClickRow(usize),
    DoubleClickRow(usize),
    ToggleRowExpansion(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Sorting
    // ─────────────────────────────────────────────────────────────────────────
    /// Sort by the visible column at this index
    SortColumn(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Pagination
    // ─────────────────────────────────────────────────────────────────────────
    GoToPage(usize),
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    NextRowsPerPage,
    PrevRowsPerPage,
    /// Next rows-per-page option, wrapping back to the smallest
    CycleRowsPerPage,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ReloadData => write!(f, "ReloadData"),
            Action::ToggleEventLog => write!(f, "ToggleEventLog"),
            Action::ClearSelectedRows => write!(f, "ClearSelectedRows"),
            Action::FocusNextRow => write!(f, "FocusNextRow"),
            Action::FocusPrevRow => write!(f, "FocusPrevRow"),
            Action::FocusFirstRow => write!(f, "FocusFirstRow"),
            Action::FocusLastRow => write!(f, "FocusLastRow"),
            Action::FocusNextColumn => write!(f, "FocusNextColumn"),
            Action::FocusPrevColumn => write!(f, "FocusPrevColumn"),
            Action::ToggleRowSelection(i) => write!(f, "ToggleRowSelection({})", i),
            Action::ToggleAllRows => write!(f, "ToggleAllRows"),
            Action::ClickRow(i) => write!(f, "ClickRow({})", i),
            Action::DoubleClickRow(i) => write!(f, "DoubleClickRow({})", i),
            Action::ToggleRowExpansion(i) => write!(f, "ToggleRowExpansion({})", i),
            Action::SortColumn(i) => write!(f, "SortColumn({})", i),
            Action::GoToPage(p) => write!(f, "GoToPage({})", p),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::FirstPage => write!(f, "FirstPage"),
            Action::LastPage => write!(f, "LastPage"),
            Action::NextRowsPerPage => write!(f, "NextRowsPerPage"),
            Action::PrevRowsPerPage => write!(f, "PrevRowsPerPage"),
            Action::CycleRowsPerPage => write!(f, "CycleRowsPerPage"),
        }
    }
}
