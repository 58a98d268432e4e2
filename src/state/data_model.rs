use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

pub type Row = BTreeMap<String, Value>;

/// Field holding nested rows when a data source is hierarchical.
pub const CHILDREN_KEY: &str = "children";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub key: String,
    pub title: String,
}

impl Column {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
        }
    }

    pub fn keyed(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            title: key.clone(),
            key,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct TreeRow {
    pub fields: Row,
    pub children: Vec<TreeRow>,
}

impl TreeRow {
    pub fn leaf(fields: Row) -> Self {
        Self {
            fields,
            children: Vec::new(),
        }
    }

    /// Splits a nested `children` array out of a JSON object row.
    ///
    /// Non-object entries inside `children` are ignored.
    pub fn from_row(mut fields: Row) -> Self {
        let children = match fields.remove(CHILDREN_KEY) {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(map) => Some(TreeRow::from_row(map.into_iter().collect())),
                    _ => None,
                })
                .collect(),
            Some(other) => {
                fields.insert(CHILDREN_KEY.to_string(), other);
                Vec::new()
            }
            None => Vec::new(),
        };
        Self { fields, children }
    }
}

/// Builds columns whose key and title are both the given name.
pub fn columns_from_keys<I, S>(keys: I) -> Vec<Column>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    keys.into_iter().map(Column::keyed).collect()
}

/// Returns the sorted union of all keys across the given rows, excluding `children`.
pub fn derive_columns<'a>(rows: impl IntoIterator<Item = &'a TreeRow>) -> Vec<Column> {
    let mut keys = std::collections::BTreeSet::new();
    for row in rows {
        collect_keys(row, &mut keys);
    }
    columns_from_keys(keys)
}

fn collect_keys(row: &TreeRow, keys: &mut std::collections::BTreeSet<String>) {
    keys.extend(row.fields.keys().cloned());
    for child in &row.children {
        collect_keys(child, keys);
    }
}

/// Formats a JSON value for display in a table cell.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Interprets raw text typed or pasted into a cell.
///
/// Only the empty string becomes `null`; whitespace-only text is kept.
pub fn parse_cell_input(input: &str) -> Value {
    if input.is_empty() {
        return Value::Null;
    }
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Value::String(input.to_string());
    }
    match trimmed {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::Number(int.into());
    }
    if let Ok(float) = trimmed.parse::<f64>() {
        if let Some(number) = Number::from_f64(float) {
            return Value::Number(number);
        }
    }
    Value::String(input.to_string())
}
