use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::state::data_model::{self, Row, TreeRow};
use crate::state::table_context::TableOptions;

#[derive(Debug, Error)]
pub enum JsonIoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("JSON root is not an array")]
    NotAnArray,

    #[error("JSON array contains non-object elements")]
    NotArrayOfObjects,
}

/// Parses a JSON array of objects. Objects may nest rows under `children`.
pub fn parse_rows(content: &str) -> Result<Vec<TreeRow>, JsonIoError> {
    let value: Value = serde_json::from_str(content)?;

    match value {
        Value::Array(arr) => {
            let mut rows = Vec::with_capacity(arr.len());
            for item in arr {
                match item {
                    Value::Object(map) => {
                        let row: Row = map.into_iter().collect();
                        rows.push(TreeRow::from_row(row));
                    }
                    _ => return Err(JsonIoError::NotArrayOfObjects),
                }
            }
            Ok(rows)
        }
        _ => Err(JsonIoError::NotAnArray),
    }
}

pub fn load_json(path: &Path) -> Result<Vec<TreeRow>, JsonIoError> {
    let content = fs::read_to_string(path)?;
    parse_rows(&content)
}

/// Field used as the row key when every root row carries it.
pub const DEFAULT_ROW_KEY: &str = "id";

/// Table options for loaded rows: columns are the union of all keys and
/// `id` becomes the row key when every root row has one.
pub fn table_options(rows: Vec<TreeRow>) -> TableOptions {
    let columns = data_model::derive_columns(&rows);
    let keyed = !rows.is_empty() && rows.iter().all(|row| row.fields.contains_key(DEFAULT_ROW_KEY));
    let options = TableOptions::new(rows, columns);
    if keyed {
        options.with_row_key(DEFAULT_ROW_KEY)
    } else {
        options
    }
}

pub fn load_table(path: &Path) -> Result<TableOptions, JsonIoError> {
    let rows = load_json(path)?;
    Ok(table_options(rows))
}
