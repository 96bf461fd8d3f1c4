//! Data file loading
//!
//! Reads CSV, JSON or YAML files into [`Record`] rows and derives a default
//! column set from them.

use crate::model::{CellValue, Column, Record, RowData};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Unsupported data file '{path}': expected .csv, .json, .yaml or .yml")]
    UnsupportedFormat { path: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Row {index} is not an object")]
    NotAnObject { index: usize },

    #[error("Expected a list of rows, or an object with a \"rows\" or \"data\" list")]
    NotAList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Json,
    Yaml,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(DataFormat::Csv),
            "json" => Some(DataFormat::Json),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            _ => None,
        }
    }
}

/// Load every row of a data file
pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, LoadError> {
    let path = path.as_ref();
    let format = DataFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.display().to_string(),
    })?;
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let rows = parse_rows(&contents, format)?;
    log::info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn parse_rows(contents: &str, format: DataFormat) -> Result<Vec<Record>, LoadError> {
    match format {
        DataFormat::Csv => parse_csv(contents),
        DataFormat::Json => records_from_value(serde_json::from_str(contents)?),
        DataFormat::Yaml => records_from_value(serde_yaml::from_str(contents)?),
    }
}

fn parse_csv(contents: &str) -> Result<Vec<Record>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = Record::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            row.insert(header.clone(), infer_value(field));
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Typed value of a CSV field
pub fn infer_value(field: &str) -> Value {
    if field.is_empty() {
        return Value::Null;
    }
    match field {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(int) = field.parse::<i64>() {
        return Value::from(int);
    }
    match field.parse::<f64>() {
        Ok(float) if float.is_finite() => Value::from(float),
        _ => Value::String(field.to_string()),
    }
}

fn records_from_value(value: Value) -> Result<Vec<Record>, LoadError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove("rows").or_else(|| object.remove("data")) {
            Some(Value::Array(items)) => items,
            _ => return Err(LoadError::NotAList),
        },
        _ => return Err(LoadError::NotAList),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(Record::from(map)),
            _ => Err(LoadError::NotAnObject { index }),
        })
        .collect()
}

/// One sortable column per field, in first-seen order; numeric fields align right
pub fn infer_columns(rows: &[Record]) -> Vec<Column<Record>> {
    let mut keys: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !keys.contains(key) {
                keys.push(key.clone());
            }
        }
    }

    keys.into_iter()
        .map(|key| {
            let numeric = is_numeric_field(rows, &key);
            let column = Column::new(key.clone()).id(key.clone()).field(key).sortable();
            if numeric {
                column.right()
            } else {
                column
            }
        })
        .collect()
}

fn is_numeric_field(rows: &[Record], key: &str) -> bool {
    let mut values = rows
        .iter()
        .filter_map(|row| row.field(key))
        .filter(|value| !value.is_null())
        .peekable();
    values.peek().is_some() && values.all(|value| matches!(value, CellValue::Number(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Alignment;

    #[test]
    fn test_format_from_path() {
        assert_eq!(DataFormat::from_path(Path::new("a.csv")), Some(DataFormat::Csv));
        assert_eq!(DataFormat::from_path(Path::new("a.JSON")), Some(DataFormat::Json));
        assert_eq!(DataFormat::from_path(Path::new("a.yml")), Some(DataFormat::Yaml));
        assert_eq!(DataFormat::from_path(Path::new("a.txt")), None);
        assert_eq!(DataFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_infer_value() {
        assert_eq!(infer_value(""), Value::Null);
        assert_eq!(infer_value("true"), Value::Bool(true));
        assert_eq!(infer_value("42"), Value::from(42));
        assert_eq!(infer_value("4.5"), Value::from(4.5));
        assert_eq!(infer_value("NaN"), Value::String("NaN".into()));
        assert_eq!(infer_value("hello"), Value::String("hello".into()));
    }

    #[test]
    fn test_parse_csv() {
        let csv = "id,name,score\n1, Ada ,9.5\n2,Grace,\n";
        let rows = parse_rows(csv, DataFormat::Csv).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("name"), Some(&Value::String("Ada".into())));
        assert_eq!(rows[0].get("score"), Some(&Value::from(9.5)));
        assert_eq!(rows[1].get("score"), Some(&Value::Null));
    }

    #[test]
    fn test_parse_json_array_and_wrapped() {
        let array = r#"[{"id": 1, "name": "Ada"}, {"id": 2, "name": "Grace"}]"#;
        let wrapped = r#"{"rows": [{"id": 1}]}"#;

        assert_eq!(parse_rows(array, DataFormat::Json).unwrap().len(), 2);
        assert_eq!(parse_rows(wrapped, DataFormat::Json).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_json_keeps_field_order() {
        let rows = parse_rows(r#"[{"z": 1, "a": 2, "m": 3}]"#, DataFormat::Json).unwrap();
        let keys: Vec<&String> = rows[0].keys().collect();

        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "- id: 1\n  name: Ada\n- id: 2\n  name: Grace\n";
        let rows = parse_rows(yaml, DataFormat::Yaml).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].key("id"), Some("2".to_string()));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_rows(r#"{"id": 1}"#, DataFormat::Json),
            Err(LoadError::NotAList)
        ));
        assert!(matches!(
            parse_rows("[1, 2]", DataFormat::Json),
            Err(LoadError::NotAnObject { index: 0 })
        ));
        assert!(matches!(
            parse_rows("[", DataFormat::Json),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_load_rows_rejects_unknown_extension() {
        let err = load_rows("data.txt").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_infer_columns() {
        let rows = vec![
            Record::new().with("id", 1).with("name", "Ada"),
            Record::new().with("id", 2).with("email", "g@x.io"),
        ];
        let columns = infer_columns(&rows);
        let ids: Vec<&str> = columns.iter().map(|c| c.id.as_str()).collect();

        assert_eq!(ids, vec!["id", "name", "email"]);
        assert_eq!(columns[0].align, Alignment::Right);
        assert_eq!(columns[1].align, Alignment::Left);
        assert!(columns.iter().all(|c| c.sortable));
    }
}
