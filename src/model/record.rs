//! Row data - the records a table renders
//!
//! Rows are owned by the caller. The table only reads them through
//! [`RowData`] and reorders views over them; it never mutates a row.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::fmt;

/// A single value read out of a row
///
/// Values of different kinds order as `Null < Bool < Number < Text`, so a
/// column with mixed content still sorts deterministically.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    fn rank(&self) -> u8 {
        match self {
            CellValue::Null => 0,
            CellValue::Bool(_) => 1,
            CellValue::Number(_) => 2,
            CellValue::Text(_) => 3,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }

    /// Total order used by the built-in column sort
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            // Integral values print without a trailing ".0"
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => n.as_f64().map(CellValue::Number).unwrap_or_default(),
            Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// Read access to a row
///
/// `field` backs string selectors and the key field. Rows whose key field is
/// missing or null fall back to whole-row equality for identity.
pub trait RowData: Clone + PartialEq {
    /// Look up a named field
    fn field(&self, name: &str) -> Option<CellValue>;

    /// Identity of the row under `key_field`, if it has one
    fn key(&self, key_field: &str) -> Option<String> {
        self.field(key_field)
            .filter(|value| !value.is_null())
            .map(|value| value.to_string())
    }
}

/// An ordered JSON object used as the stock row type
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert, handy for fixtures
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, key: String, value: Value) {
        self.0.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Field names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl RowData for Record {
    fn field(&self, name: &str) -> Option<CellValue> {
        self.0.get(name).map(CellValue::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_ordering_across_kinds() {
        let mut values = vec![
            CellValue::from("b"),
            CellValue::from(2.0),
            CellValue::Null,
            CellValue::from(true),
            CellValue::from("a"),
            CellValue::from(-1.5),
        ];
        values.sort_by(|a, b| a.compare(b));

        assert_eq!(
            values,
            vec![
                CellValue::Null,
                CellValue::Bool(true),
                CellValue::Number(-1.5),
                CellValue::Number(2.0),
                CellValue::Text("a".to_string()),
                CellValue::Text("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Number(42.0).to_string(), "42");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_record_field_and_key() {
        let record = Record::new().with("id", 7).with("name", "Ada");

        assert_eq!(record.field("name"), Some(CellValue::Text("Ada".into())));
        assert_eq!(record.key("id"), Some("7".to_string()));
        assert_eq!(record.key("missing"), None);
    }

    #[test]
    fn test_null_key_is_no_key() {
        let record = Record::new().with("id", Value::Null);
        assert_eq!(record.key("id"), None);
    }

    #[test]
    fn test_record_keeps_insertion_order() {
        let record = Record::new().with("zeta", 1).with("alpha", 2);
        let keys: Vec<&String> = record.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}
