//! datatable-tui - an interactive data table for the terminal
//!
//! The `model` layer holds the table's pure state machine: rows, columns,
//! selection, sorting and pagination driven by `table_reducer`. The
//! `components` layer renders a `DataTable` with ratatui and maps key and
//! mouse input onto it. The `datatable` binary wires both into a viewer for
//! CSV, JSON and YAML files.

pub mod action;
pub mod app;
pub mod component;
pub mod components;
pub mod config;
pub mod model;
pub mod services;
pub mod tui;
