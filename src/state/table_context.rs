use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::area::indices::{IndexPair, IndexRange};
use crate::area::model::AreaData;
use crate::state::data_model::{self, Column, Row, TreeRow};

/// Reads and writes a single cell of a row.
pub trait CellAccessor: Send + Sync {
    fn get(&self, row: &Row, column: &Column) -> Value;
    fn set(&self, row: &mut Row, column: &Column, value: Value);
}

/// Direct property access keyed by `column.key`.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyAccessor;

impl CellAccessor for KeyAccessor {
    fn get(&self, row: &Row, column: &Column) -> Value {
        row.get(&column.key).cloned().unwrap_or(Value::Null)
    }

    fn set(&self, row: &mut Row, column: &Column, value: Value) {
        row.insert(column.key.clone(), value);
    }
}

#[derive(Clone, Default)]
pub struct TableOptions {
    pub rows: Vec<TreeRow>,
    pub columns: Vec<Column>,
    pub accessor: Option<Arc<dyn CellAccessor>>,
    pub expand_row_keys: Vec<String>,
    pub row_key: Option<String>,
}

impl TableOptions {
    pub fn new(rows: Vec<TreeRow>, columns: Vec<Column>) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    pub fn from_rows(rows: Vec<Row>, columns: Vec<Column>) -> Self {
        Self::new(rows.into_iter().map(TreeRow::leaf).collect(), columns)
    }

    /// Columns `A, B, ...` and rows whose cell `(i, j)` holds the number spelled `"{i}{j}"`.
    pub fn mock(row_count: usize, column_count: usize) -> Self {
        let keys: Vec<String> = (0..column_count).map(column_letter).collect();
        let rows = (0..row_count)
            .map(|i| {
                let fields: Row = keys
                    .iter()
                    .enumerate()
                    .map(|(j, key)| {
                        let number = format!("{i}{j}").parse::<i64>().unwrap_or_default();
                        (key.clone(), Value::Number(number.into()))
                    })
                    .collect();
                TreeRow::leaf(fields)
            })
            .collect();
        Self::new(rows, data_model::columns_from_keys(keys))
    }

    pub fn with_accessor(mut self, accessor: Arc<dyn CellAccessor>) -> Self {
        self.accessor = Some(accessor);
        self
    }

    pub fn with_row_key(mut self, row_key: impl Into<String>) -> Self {
        self.row_key = Some(row_key.into());
        self
    }

    pub fn with_expanded<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand_row_keys = keys.into_iter().map(Into::into).collect();
        self
    }
}

fn column_letter(index: usize) -> String {
    let mut name = String::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        name.insert(0, (b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    name
}

type RowPath = Vec<usize>;

/// The projected, flat view of a (possibly hierarchical) table that all
/// index math operates against.
#[derive(Clone)]
pub struct TableContext {
    tree: Vec<TreeRow>,
    columns: Vec<Column>,
    accessor: Arc<dyn CellAccessor>,
    expanded: BTreeSet<String>,
    row_key: Option<String>,
    projection: Vec<RowPath>,
    key_index: HashMap<String, usize>,
}

impl Default for TableContext {
    fn default() -> Self {
        Self::new(TableOptions::default())
    }
}

impl fmt::Debug for TableContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableContext")
            .field("rows", &self.projection.len())
            .field("columns", &self.columns)
            .field("expanded", &self.expanded)
            .field("row_key", &self.row_key)
            .finish()
    }
}

impl TableContext {
    pub fn new(options: TableOptions) -> Self {
        let TableOptions {
            rows,
            columns,
            accessor,
            expand_row_keys,
            row_key,
        } = options;
        let mut table = Self {
            tree: rows,
            columns,
            accessor: accessor.unwrap_or_else(|| Arc::new(KeyAccessor)),
            expanded: expand_row_keys.into_iter().collect(),
            row_key,
            projection: Vec::new(),
            key_index: HashMap::new(),
        };
        table.project();
        table
    }

    fn project(&mut self) {
        let mut projection = Vec::new();
        for (index, row) in self.tree.iter().enumerate() {
            self.push_visible(row, vec![index], &mut projection);
        }

        let mut key_index = HashMap::with_capacity(projection.len());
        for (index, path) in projection.iter().enumerate() {
            if let Some(key) = self.node(path).and_then(|row| self.key_of(row)) {
                key_index.entry(key).or_insert(index);
            }
        }

        self.projection = projection;
        self.key_index = key_index;
    }

    fn push_visible(&self, row: &TreeRow, path: RowPath, out: &mut Vec<RowPath>) {
        let expanded = self
            .key_of(row)
            .is_some_and(|key| self.expanded.contains(&key));
        out.push(path.clone());
        if !expanded {
            return;
        }
        for (index, child) in row.children.iter().enumerate() {
            let mut child_path = path.clone();
            child_path.push(index);
            self.push_visible(child, child_path, out);
        }
    }

    fn key_of(&self, row: &TreeRow) -> Option<String> {
        let field = self.row_key.as_ref()?;
        row.fields.get(field).map(data_model::display_value)
    }

    fn node(&self, path: &[usize]) -> Option<&TreeRow> {
        let (first, rest) = path.split_first()?;
        let mut node = self.tree.get(*first)?;
        for child in rest {
            node = node.children.get(*child)?;
        }
        Some(node)
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut TreeRow> {
        let path = self.projection.get(index)?;
        let (first, rest) = path.split_first()?;
        let mut node = self.tree.get_mut(*first)?;
        for child in rest {
            node = node.children.get_mut(*child)?;
        }
        Some(node)
    }

    pub fn len(&self) -> usize {
        self.projection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projection.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_index(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.key == key)
    }

    pub fn tree(&self) -> &[TreeRow] {
        &self.tree
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        let path = self.projection.get(index)?;
        self.node(path).map(|row| &row.fields)
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.projection
            .iter()
            .filter_map(|path| self.node(path).map(|row| &row.fields))
    }

    /// Nesting level of a projected row; roots are depth 0.
    pub fn depth(&self, index: usize) -> usize {
        self.projection
            .get(index)
            .map(|path| path.len().saturating_sub(1))
            .unwrap_or_default()
    }

    pub fn has_children(&self, index: usize) -> bool {
        self.projection
            .get(index)
            .and_then(|path| self.node(path))
            .is_some_and(|row| !row.children.is_empty())
    }

    pub fn row_key(&self, index: usize) -> Option<String> {
        let path = self.projection.get(index)?;
        self.key_of(self.node(path)?)
    }

    pub fn row_index(&self, key: &str) -> Option<usize> {
        self.key_index.get(key).copied()
    }

    pub fn locate(&self, row_key: &str, column_key: &str) -> Option<IndexPair> {
        Some(IndexPair::new(
            self.row_index(row_key)?,
            self.column_index(column_key)?,
        ))
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    /// Flips the expansion state of a row and rebuilds the projection.
    pub fn toggle_expanded(&mut self, key: &str) -> bool {
        if !self.expanded.remove(key) {
            self.expanded.insert(key.to_string());
        }
        self.project();
        self.expanded.contains(key)
    }

    pub fn cell_value(&self, row: usize, col: usize) -> Value {
        match (self.row(row), self.columns.get(col)) {
            (Some(fields), Some(column)) => self.accessor.get(fields, column),
            _ => Value::Null,
        }
    }

    pub fn set_cell_value(&mut self, row: usize, col: usize, value: Value) -> bool {
        let Some(column) = self.columns.get(col).cloned() else {
            return false;
        };
        let accessor = Arc::clone(&self.accessor);
        let Some(node) = self.node_mut(row) else {
            return false;
        };
        accessor.set(&mut node.fields, &column, value);
        true
    }

    /// Materializes the rows, columns and values covered by `range`.
    pub fn area_data(&self, range: &IndexRange) -> AreaData {
        let row_end = range.end.row.min(self.len());
        let col_end = range.end.col.min(self.columns.len());
        let rows: Vec<usize> = (range.start.row.min(row_end)..row_end).collect();
        let col_span = range.start.col.min(col_end)..col_end;
        let columns = self.columns[col_span.clone()].to_vec();
        let values = rows
            .iter()
            .map(|row| col_span.clone().map(|col| self.cell_value(*row, col)).collect())
            .collect();
        AreaData {
            rows,
            columns,
            values,
        }
    }

    /// Writes `source` starting at `start`, truncated at the table's edges.
    ///
    /// Returns the range actually written, or `None` when the block is empty
    /// or starts outside the table.
    pub fn write_block(&mut self, start: IndexPair, source: &[Vec<Value>]) -> Option<IndexRange> {
        let width = source.first().map(Vec::len).unwrap_or_default();
        if width == 0 {
            return None;
        }
        if start.row >= self.len() || start.col >= self.columns.len() {
            return None;
        }

        let row_end = (start.row + source.len()).min(self.len());
        let col_end = (start.col + width).min(self.columns.len());

        for (i, row) in (start.row..row_end).enumerate() {
            for (j, col) in (start.col..col_end).enumerate() {
                let value = source[i].get(j).cloned().unwrap_or(Value::Null);
                self.set_cell_value(row, col, value);
            }
        }

        Some(IndexRange {
            start,
            end: IndexPair::new(row_end, col_end),
        })
    }
}
