//! Column definitions
//!
//! A column says how to read a value out of a row (a field name or a
//! selector closure), how to display it, and how to lay it out. Columns are
//! static configuration; the table never mutates them.

use super::conditional::ConditionalStyle;
use super::record::{CellValue, RowData};
use ratatui::layout::Constraint;
use ratatui::style::Style;
use ratatui::text::Line;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

pub type ColumnId = String;

/// Derives a cell value from a row and its index in the current view
pub type SelectorFn<T> = Rc<dyn Fn(&T, usize) -> CellValue>;
/// Display-only formatting; sorting still uses the selector
pub type FormatFn<T> = Rc<dyn Fn(&T, usize) -> String>;
/// Fully custom cell render
pub type CellFn<T> = Rc<dyn Fn(&T, usize, &Column<T>) -> Line<'static>>;
/// Column-level comparator used in place of selector ordering
pub type ColumnSortFn<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// How a column reads its value
pub enum Selector<T> {
    Field(String),
    Func(SelectorFn<T>),
}

impl<T> Clone for Selector<T> {
    fn clone(&self) -> Self {
        match self {
            Selector::Field(name) => Selector::Field(name.clone()),
            Selector::Func(f) => Selector::Func(Rc::clone(f)),
        }
    }
}

impl<T: RowData> Selector<T> {
    pub fn value(&self, row: &T, row_index: usize) -> CellValue {
        match self {
            Selector::Field(name) => row.field(name).unwrap_or_default(),
            Selector::Func(f) => f(row, row_index),
        }
    }
}

/// Horizontal alignment of a column's cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl From<Alignment> for ratatui::layout::Alignment {
    fn from(align: Alignment) -> Self {
        match align {
            Alignment::Left => ratatui::layout::Alignment::Left,
            Alignment::Center => ratatui::layout::Alignment::Center,
            Alignment::Right => ratatui::layout::Alignment::Right,
        }
    }
}

/// A table column
pub struct Column<T> {
    /// Stable identifier; assigned from the column position when left empty
    pub id: ColumnId,
    pub name: String,
    pub selector: Option<Selector<T>>,
    pub format: Option<FormatFn<T>>,
    pub cell: Option<CellFn<T>>,
    pub sortable: bool,
    pub sort_function: Option<ColumnSortFn<T>>,
    /// Fixed width in cells
    pub width: Option<u16>,
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
    /// Share of the leftover width; 0 sizes the column to its header
    pub grow: u16,
    pub align: Alignment,
    /// Never rendered
    pub omit: bool,
    /// Hidden while the table is narrower than this many cells
    pub hide: Option<u16>,
    /// Clip instead of truncating with an ellipsis
    pub wrap: bool,
    /// Clicks on this column do not count as row clicks
    pub ignore_row_click: bool,
    pub conditional_cell_styles: Vec<ConditionalStyle<T>>,
    pub style: Style,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            selector: self.selector.clone(),
            format: self.format.clone(),
            cell: self.cell.clone(),
            sortable: self.sortable,
            sort_function: self.sort_function.clone(),
            width: self.width,
            min_width: self.min_width,
            max_width: self.max_width,
            grow: self.grow,
            align: self.align,
            omit: self.omit,
            hide: self.hide,
            wrap: self.wrap,
            ignore_row_click: self.ignore_row_click,
            conditional_cell_styles: self.conditional_cell_styles.clone(),
            style: self.style,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .finish_non_exhaustive()
    }
}

impl<T: RowData> Column<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            selector: None,
            format: None,
            cell: None,
            sortable: false,
            sort_function: None,
            width: None,
            min_width: None,
            max_width: None,
            grow: 1,
            align: Alignment::Left,
            omit: false,
            hide: None,
            wrap: false,
            ignore_row_click: false,
            conditional_cell_styles: Vec::new(),
            style: Style::default(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Read the value from a named field
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.selector = Some(Selector::Field(field.into()));
        self
    }

    pub fn selector(mut self, f: impl Fn(&T, usize) -> CellValue + 'static) -> Self {
        self.selector = Some(Selector::Func(Rc::new(f)));
        self
    }

    pub fn format(mut self, f: impl Fn(&T, usize) -> String + 'static) -> Self {
        self.format = Some(Rc::new(f));
        self
    }

    pub fn cell(mut self, f: impl Fn(&T, usize, &Column<T>) -> Line<'static> + 'static) -> Self {
        self.cell = Some(Rc::new(f));
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn sort_function(mut self, f: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.sort_function = Some(Rc::new(f));
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn grow(mut self, grow: u16) -> Self {
        self.grow = grow;
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn right(self) -> Self {
        self.align(Alignment::Right)
    }

    pub fn center(self) -> Self {
        self.align(Alignment::Center)
    }

    pub fn omit(mut self, omit: bool) -> Self {
        self.omit = omit;
        self
    }

    pub fn hide_below(mut self, table_width: u16) -> Self {
        self.hide = Some(table_width);
        self
    }

    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    pub fn ignore_row_click(mut self) -> Self {
        self.ignore_row_click = true;
        self
    }

    pub fn conditional_cell_styles(mut self, rules: Vec<ConditionalStyle<T>>) -> Self {
        self.conditional_cell_styles = rules;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The row's value under this column's selector
    pub fn value(&self, row: &T, row_index: usize) -> CellValue {
        self.selector
            .as_ref()
            .map(|selector| selector.value(row, row_index))
            .unwrap_or_default()
    }

    /// Whether the column can drive a sort at all
    pub fn can_sort(&self) -> bool {
        self.sortable && (self.selector.is_some() || self.sort_function.is_some())
    }

    pub fn is_visible(&self, table_width: u16) -> bool {
        !self.omit && self.hide.map_or(true, |min| table_width >= min)
    }

    /// Layout constraint for this column
    pub fn constraint(&self) -> Constraint {
        if let Some(width) = self.width {
            return Constraint::Length(width);
        }
        if let Some(min) = self.min_width {
            return Constraint::Min(min);
        }
        if let Some(max) = self.max_width {
            return Constraint::Max(max);
        }
        if self.grow == 0 {
            // Leave room for the sort indicator
            let header = unicode_width::UnicodeWidthStr::width(self.name.as_str()) as u16;
            return Constraint::Length(header + 2);
        }
        Constraint::Fill(self.grow)
    }
}

/// Give every column without an id a positional one ("1", "2", ...)
pub fn decorate_columns<T>(columns: Vec<Column<T>>) -> Vec<Column<T>> {
    columns
        .into_iter()
        .enumerate()
        .map(|(index, mut column)| {
            if column.id.is_empty() {
                column.id = (index + 1).to_string();
            }
            column
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::Record;

    #[test]
    fn test_field_selector_reads_value() {
        let column: Column<Record> = Column::new("Name").field("name");
        let row = Record::new().with("name", "Grace");

        assert_eq!(column.value(&row, 0), CellValue::Text("Grace".into()));
    }

    #[test]
    fn test_missing_field_is_null() {
        let column: Column<Record> = Column::new("Name").field("name");
        assert_eq!(column.value(&Record::new(), 0), CellValue::Null);
    }

    #[test]
    fn test_selector_fn_receives_index() {
        let column: Column<Record> = Column::new("#").selector(|_, index| CellValue::from(index as i64));
        assert_eq!(column.value(&Record::new(), 3), CellValue::Number(3.0));
    }

    #[test]
    fn test_decorate_columns_fills_missing_ids() {
        let columns: Vec<Column<Record>> = vec![
            Column::new("A"),
            Column::new("B").id("bee"),
            Column::new("C"),
        ];
        let ids: Vec<String> = decorate_columns(columns)
            .into_iter()
            .map(|column| column.id)
            .collect();

        assert_eq!(ids, vec!["1", "bee", "3"]);
    }

    #[test]
    fn test_visibility() {
        let omitted: Column<Record> = Column::new("A").omit(true);
        let narrow: Column<Record> = Column::new("B").hide_below(80);

        assert!(!omitted.is_visible(200));
        assert!(!narrow.is_visible(60));
        assert!(narrow.is_visible(80));
    }

    #[test]
    fn test_constraints() {
        let fixed: Column<Record> = Column::new("A").width(8);
        let grown: Column<Record> = Column::new("B").grow(3);
        let tight: Column<Record> = Column::new("Code").grow(0);

        assert_eq!(fixed.constraint(), Constraint::Length(8));
        assert_eq!(grown.constraint(), Constraint::Fill(3));
        assert_eq!(tight.constraint(), Constraint::Length(6));
    }

    #[test]
    fn test_can_sort_requires_a_way_to_compare() {
        let no_selector: Column<Record> = Column::new("A").sortable();
        let with_field: Column<Record> = Column::new("A").field("a").sortable();

        assert!(!no_selector.can_sort());
        assert!(with_field.can_sort());
    }
}
