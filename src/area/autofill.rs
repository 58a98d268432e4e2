//! Fill-handle value generation.
//!
//! A numeric source that forms an arithmetic progression is continued;
//! anything else is repeated cyclically.

use serde_json::{Number, Value};

use crate::area::indices::IndexRange;
use crate::area::model::Area;
use crate::state::table_context::TableContext;

/// Common difference of a numeric source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Int(i64),
    Float(f64),
}

/// Step of an arithmetic progression, or `None` when `source` is not one.
///
/// Fewer than two values count as a progression with a zero step. Integer
/// sources keep an integer step.
pub fn arithmetic_step(source: &[Value]) -> Option<Step> {
    if source.is_empty() || !source.iter().all(Value::is_number) {
        return None;
    }

    if let Some(ints) = source.iter().map(Value::as_i64).collect::<Option<Vec<i64>>>() {
        if ints.len() < 2 {
            return Some(Step::Int(0));
        }
        let step = ints[1].checked_sub(ints[0])?;
        let regular = ints
            .windows(2)
            .all(|pair| pair[0].checked_add(step) == Some(pair[1]));
        return regular.then_some(Step::Int(step));
    }

    let floats = source
        .iter()
        .map(Value::as_f64)
        .collect::<Option<Vec<f64>>>()?;
    if floats.len() < 2 {
        return Some(Step::Float(0.0));
    }
    let step = floats[1] - floats[0];
    let regular = floats.windows(2).all(|pair| pair[1] == pair[0] + step);
    regular.then_some(Step::Float(step))
}

/// Produces `count` values continuing `source`.
///
/// With `prepend` the values lead the source and are computed backward
/// from its first element. Cyclic repetition ignores `prepend`.
pub fn extend_sequence(source: &[Value], count: usize, prepend: bool) -> Vec<Value> {
    if source.is_empty() || count == 0 {
        return Vec::new();
    }

    if let Some(step) = arithmetic_step(source) {
        if let Some(values) = progression(source, step, count, prepend) {
            return values;
        }
    }

    source.iter().cycle().take(count).cloned().collect()
}

fn progression(source: &[Value], step: Step, count: usize, prepend: bool) -> Option<Vec<Value>> {
    let seed = if prepend { source.first()? } else { source.last()? };

    let mut values = Vec::with_capacity(count);
    match step {
        Step::Int(step) => {
            let step = if prepend { step.checked_neg()? } else { step };
            let mut current = seed.as_i64()?;
            for _ in 0..count {
                current = current.checked_add(step)?;
                values.push(Value::Number(current.into()));
            }
        }
        Step::Float(step) => {
            let step = if prepend { -step } else { step };
            let mut current = seed.as_f64()?;
            for _ in 0..count {
                current += step;
                values.push(Value::Number(Number::from_f64(current)?));
            }
        }
    }

    if prepend {
        values.reverse();
    }
    Some(values)
}

/// Cells newly covered by a fill drag and the values they should receive.
#[derive(Clone, Debug, PartialEq)]
pub struct PureExtension {
    pub indices: IndexRange,
    pub values: Vec<Vec<Value>>,
}

/// Computes the delta between the extension and main areas.
///
/// Source values are re-read from `table` so that a main area folded in by
/// an earlier fill sees the written values rather than its stale snapshot.
pub fn compute_pure_extension(table: &TableContext, main: &Area, extension: &Area) -> Option<PureExtension> {
    let main_range = main.indices;
    let ext_range = extension.indices;
    if main_range.is_empty() || ext_range.is_empty() {
        return None;
    }

    let is_left = ext_range.start.col < main_range.start.col;
    let is_right = ext_range.end.col > main_range.end.col;
    let is_top = ext_range.start.row < main_range.start.row;
    let is_bottom = ext_range.end.row > main_range.end.row;

    let mut start = main_range.start;
    let mut end = main_range.end;
    if is_left {
        start.col = ext_range.start.col;
        end.col = main_range.start.col;
    } else if is_right {
        start.col = main_range.end.col;
        end.col = ext_range.end.col;
    } else if is_top {
        start.row = ext_range.start.row;
        end.row = main_range.start.row;
    } else if is_bottom {
        start.row = main_range.end.row;
        end.row = ext_range.end.row;
    } else {
        return None;
    }

    let data = &main.data;
    let column_indices: Vec<usize> = data
        .columns
        .iter()
        .filter_map(|column| table.column_index(&column.key))
        .collect();

    let values = if is_left || is_right {
        let count = end.col - start.col;
        data.rows
            .iter()
            .map(|row| {
                let source: Vec<Value> = column_indices
                    .iter()
                    .map(|col| table.cell_value(*row, *col))
                    .collect();
                extend_sequence(&source, count, is_left)
            })
            .collect()
    } else {
        let count = end.row - start.row;
        let mut grid = vec![Vec::with_capacity(column_indices.len()); count];
        for col in &column_indices {
            let source: Vec<Value> = data
                .rows
                .iter()
                .map(|row| table.cell_value(*row, *col))
                .collect();
            for (row, value) in extend_sequence(&source, count, is_top).into_iter().enumerate() {
                grid[row].push(value);
            }
        }
        grid
    };

    Some(PureExtension {
        indices: IndexRange { start, end },
        values,
    })
}
