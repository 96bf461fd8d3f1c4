//! Viewer configuration
//!
//! Table defaults live in `~/.datatable-tui/config.json`; command line flags
//! override them for a single run.

use crate::model::{ConditionalStyle, Record, RowData};
use anyhow::{anyhow, Context};
use clap::Parser;
use ratatui::style::{Color, Modifier, Style};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Highlight rows whose `column` value matches `pattern`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalRuleConfig {
    pub column: String,
    pub pattern: String,
    #[serde(default)]
    pub fg: Option<String>,
    #[serde(default)]
    pub bg: Option<String>,
    #[serde(default)]
    pub bold: bool,
}

impl ConditionalRuleConfig {
    pub fn compile(&self) -> anyhow::Result<ConditionalStyle<Record>> {
        let regex = Regex::new(&self.pattern)
            .with_context(|| format!("Invalid pattern for column '{}'", self.column))?;

        let mut style = Style::default();
        if let Some(fg) = &self.fg {
            style = style.fg(parse_color(fg)?);
        }
        if let Some(bg) = &self.bg {
            style = style.bg(parse_color(bg)?);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }

        let column = self.column.clone();
        Ok(ConditionalStyle::new(
            move |row: &Record| {
                row.field(&column)
                    .is_some_and(|value| regex.is_match(&value.to_string()))
            },
            style,
        ))
    }
}

fn parse_color(name: &str) -> anyhow::Result<Color> {
    Color::from_str(name).map_err(|_| anyhow!("Unknown color '{}'", name))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub key_field: String,
    pub title: Option<String>,
    pub dense: bool,
    pub striped: bool,
    pub highlight_on_hover: bool,
    pub selectable_rows: bool,
    pub single_select: bool,
    pub selectable_rows_highlight: bool,
    /// Select-all only touches the current page
    pub visible_only: bool,
    pub expandable_rows: bool,
    pub expand_on_row_clicked: bool,
    pub pagination: bool,
    pub rows_per_page: usize,
    pub rows_per_page_options: Vec<usize>,
    /// Offer an "All" rows-per-page option
    pub all_rows_option: bool,
    pub default_sort_field: Option<String>,
    pub default_sort_asc: bool,
    pub conditional_row_styles: Vec<ConditionalRuleConfig>,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_field: "id".to_string(),
            title: None,
            dense: false,
            striped: false,
            highlight_on_hover: true,
            selectable_rows: true,
            single_select: false,
            selectable_rows_highlight: true,
            visible_only: false,
            expandable_rows: false,
            expand_on_row_clicked: false,
            pagination: true,
            rows_per_page: 10,
            rows_per_page_options: vec![10, 15, 20, 25, 30],
            all_rows_option: false,
            default_sort_field: None,
            default_sort_asc: true,
            conditional_row_styles: Vec::new(),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".datatable-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the user config, if there is one
    ///
    /// Runs before logging is set up, so a broken file is returned as an
    /// error for the caller to report.
    pub fn load() -> anyhow::Result<Option<Config>> {
        match Self::config_path() {
            Some(config_path) => Self::load_if_exists(&config_path),
            None => Ok(None),
        }
    }

    pub fn load_if_exists(path: &Path) -> anyhow::Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;
        log::info!("Saved config to {}", config_path.display());

        Ok(())
    }

    /// Default log location next to the config file
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            Self::config_dir()
                .unwrap_or_else(env::temp_dir)
                .join("datatable.log")
        })
    }

    /// Flags given on the command line win over the file
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(key_field) = &cli.key_field {
            self.key_field = key_field.clone();
        }
        if let Some(title) = &cli.title {
            self.title = Some(title.clone());
        }
        if let Some(rows_per_page) = cli.rows_per_page {
            self.rows_per_page = rows_per_page.max(1);
        }
        if cli.no_pagination {
            self.pagination = false;
        }
        if let Some(field) = &cli.sort {
            self.default_sort_field = Some(field.clone());
        }
        if cli.desc {
            self.default_sort_asc = false;
        }
        self.dense |= cli.dense;
        self.striped |= cli.striped;
        self.single_select |= cli.single;
        self.expandable_rows |= cli.expandable;
        if let Some(log_file) = &cli.log_file {
            self.log_file = Some(log_file.clone());
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
        self
    }

    pub fn compile_row_styles(&self) -> anyhow::Result<Vec<ConditionalStyle<Record>>> {
        self.conditional_row_styles
            .iter()
            .map(ConditionalRuleConfig::compile)
            .collect()
    }
}

/// Browse a CSV, JSON or YAML file as an interactive table
#[derive(Debug, Parser)]
#[command(name = "datatable", version)]
pub struct Cli {
    /// Data file (.csv, .json, .yaml or .yml)
    pub file: PathBuf,
    /// Read settings from this file instead of ~/.datatable-tui/config.json
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Field that identifies a row
    #[arg(long)]
    pub key_field: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub rows_per_page: Option<usize>,
    #[arg(long)]
    pub no_pagination: bool,
    #[arg(long)]
    pub dense: bool,
    #[arg(long)]
    pub striped: bool,
    /// Only one row can be selected at a time
    #[arg(long)]
    pub single: bool,
    /// Rows expand to show every field
    #[arg(long)]
    pub expandable: bool,
    /// Initial sort column id
    #[arg(long)]
    pub sort: Option<String>,
    /// Sort descending initially
    #[arg(long)]
    pub desc: bool,
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// off, error, warn, info, debug or trace
    #[arg(long)]
    pub log_level: Option<String>,
    /// Write the effective settings back to the config file
    #[arg(long)]
    pub save_config: bool,
}
