use cellfill::area::autofill::{self, Step};
use cellfill::area::indices::{IndexPair, IndexRange};
use cellfill::area::model::Area;
use cellfill::state::data_model::{self, Row};
use cellfill::state::table_context::{TableContext, TableOptions};
use serde_json::{json, Value};

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().map(|v| json!(v)).collect()
}

#[test]
fn test_arithmetic_step_detection() {
    assert_eq!(autofill::arithmetic_step(&[]), None);
    assert_eq!(autofill::arithmetic_step(&ints(&[3])), Some(Step::Int(0)));
    assert_eq!(autofill::arithmetic_step(&ints(&[1, 3, 5])), Some(Step::Int(2)));
    assert_eq!(autofill::arithmetic_step(&ints(&[1, 2, 4])), None);
    assert_eq!(autofill::arithmetic_step(&[json!(1), json!("a")]), None);
    assert_eq!(
        autofill::arithmetic_step(&[json!(0.5), json!(1.0)]),
        Some(Step::Float(0.5))
    );
}

#[test]
fn test_extend_numeric_forward() {
    assert_eq!(autofill::extend_sequence(&ints(&[2, 4, 6, 8]), 3, false), ints(&[10, 12, 14]));
}

#[test]
fn test_extend_numeric_backward() {
    assert_eq!(autofill::extend_sequence(&ints(&[2, 4, 6, 8]), 2, true), ints(&[-2, 0]));
}

#[test]
fn test_extend_descending_sequence() {
    assert_eq!(autofill::extend_sequence(&ints(&[9, 6]), 3, false), ints(&[3, 0, -3]));
}

#[test]
fn test_extend_single_value_repeats() {
    assert_eq!(autofill::extend_sequence(&ints(&[5]), 3, false), ints(&[5, 5, 5]));
    assert_eq!(autofill::extend_sequence(&ints(&[5]), 2, true), ints(&[5, 5]));
}

#[test]
fn test_extend_floats() {
    let source = vec![json!(0.5), json!(1.0), json!(1.5)];
    assert_eq!(
        autofill::extend_sequence(&source, 2, false),
        vec![json!(2.0), json!(2.5)]
    );
}

#[test]
fn test_extend_text_cycles() {
    let source = vec![json!("a"), json!("b"), json!("c")];
    assert_eq!(
        autofill::extend_sequence(&source, 4, false),
        vec![json!("a"), json!("b"), json!("c"), json!("a")]
    );
}

#[test]
fn test_extend_irregular_numbers_cycle() {
    assert_eq!(
        autofill::extend_sequence(&ints(&[1, 2, 4]), 4, false),
        ints(&[1, 2, 4, 1])
    );
}

#[test]
fn test_extend_mixed_values_cycle_when_prepending() {
    let source = vec![json!("x"), json!(null)];
    assert_eq!(
        autofill::extend_sequence(&source, 3, true),
        vec![json!("x"), json!(null), json!("x")]
    );
}

#[test]
fn test_extend_overflow_falls_back_to_cycle() {
    let source = ints(&[i64::MAX - 1, i64::MAX]);
    assert_eq!(autofill::extend_sequence(&source, 2, false), source);
}

#[test]
fn test_extend_nothing() {
    assert!(autofill::extend_sequence(&[], 3, false).is_empty());
    assert!(autofill::extend_sequence(&ints(&[1, 2]), 0, false).is_empty());
}

fn sample_table() -> TableContext {
    let rows: Vec<Row> = [(1, 2), (2, 4), (3, 6), (0, 0), (0, 0)]
        .iter()
        .enumerate()
        .map(|(i, (a, b))| {
            let mut row = Row::new();
            if i < 3 {
                row.insert("A".to_string(), json!(a));
                row.insert("B".to_string(), json!(b));
            }
            row
        })
        .collect();
    TableContext::new(TableOptions::from_rows(rows, data_model::columns_from_keys(["A", "B"])))
}

fn area(table: &TableContext, start: (usize, usize), end: (usize, usize)) -> Area {
    let indices = IndexRange::new(IndexPair::new(start.0, start.1), IndexPair::new(end.0, end.1));
    Area {
        indices,
        data: table.area_data(&indices),
        ..Area::default()
    }
}

#[test]
fn test_pure_extension_right() {
    let table = sample_table();
    let main = area(&table, (0, 0), (3, 1));
    let extension = area(&table, (0, 0), (3, 2));
    let pure = autofill::compute_pure_extension(&table, &main, &extension).unwrap();
    assert_eq!(pure.indices, IndexRange::new(IndexPair::new(0, 1), IndexPair::new(3, 2)));
    assert_eq!(pure.values, vec![ints(&[1]), ints(&[2]), ints(&[3])]);
}

#[test]
fn test_pure_extension_bottom() {
    let table = sample_table();
    let main = area(&table, (0, 0), (3, 1));
    let extension = area(&table, (0, 0), (5, 1));
    let pure = autofill::compute_pure_extension(&table, &main, &extension).unwrap();
    assert_eq!(pure.indices, IndexRange::new(IndexPair::new(3, 0), IndexPair::new(5, 1)));
    assert_eq!(pure.values, vec![ints(&[4]), ints(&[5])]);
}

#[test]
fn test_pure_extension_bottom_multiple_columns() {
    let table = sample_table();
    let main = area(&table, (0, 0), (3, 2));
    let extension = area(&table, (0, 0), (4, 2));
    let pure = autofill::compute_pure_extension(&table, &main, &extension).unwrap();
    assert_eq!(pure.values, vec![ints(&[4, 8])]);
}

#[test]
fn test_pure_extension_left() {
    let table = sample_table();
    let main = area(&table, (0, 1), (3, 2));
    let extension = area(&table, (0, 0), (3, 2));
    let pure = autofill::compute_pure_extension(&table, &main, &extension).unwrap();
    assert_eq!(pure.indices, IndexRange::new(IndexPair::new(0, 0), IndexPair::new(3, 1)));
    assert_eq!(pure.values, vec![ints(&[2]), ints(&[4]), ints(&[6])]);
}

#[test]
fn test_pure_extension_top() {
    let table = sample_table();
    let main = area(&table, (1, 0), (3, 1));
    let extension = area(&table, (0, 0), (3, 1));
    let pure = autofill::compute_pure_extension(&table, &main, &extension).unwrap();
    assert_eq!(pure.indices, IndexRange::new(IndexPair::new(0, 0), IndexPair::new(1, 1)));
    assert_eq!(pure.values, vec![ints(&[1])]);
}

#[test]
fn test_pure_extension_without_growth() {
    let table = sample_table();
    let main = area(&table, (0, 0), (3, 1));
    assert_eq!(autofill::compute_pure_extension(&table, &main, &main.clone()), None);
    assert_eq!(autofill::compute_pure_extension(&table, &main, &Area::default()), None);
}
