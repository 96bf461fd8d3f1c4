//! External service interactions
//!
//! - Data file loading (CSV, JSON, YAML) and column inference
//! - Log file setup

pub mod loader;
pub mod logging;

pub use loader::{infer_columns, load_rows, parse_rows, DataFormat, LoadError};
pub use logging::init_logging;
