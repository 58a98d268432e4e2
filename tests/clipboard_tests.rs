use cellfill::io::clipboard;
use serde_json::{json, Value};

#[test]
fn test_serialize_uses_tabs_and_crlf() {
    let values = vec![
        vec![json!(1), json!("two")],
        vec![Value::Null, json!(true)],
    ];
    assert_eq!(clipboard::serialize(&values), "1\ttwo\r\n\ttrue");
}

#[test]
fn test_serialize_empty() {
    assert_eq!(clipboard::serialize(&[]), "");
}

#[test]
fn test_parse_accepts_both_line_endings() {
    let expected = vec![vec![json!(1), json!(2)], vec![json!(3), json!(4)]];
    assert_eq!(clipboard::parse("1\t2\r\n3\t4"), expected);
    assert_eq!(clipboard::parse("1\t2\n3\t4\n"), expected);
}

#[test]
fn test_parse_keeps_empty_cells() {
    assert_eq!(
        clipboard::parse("a\t\tc"),
        vec![vec![json!("a"), Value::Null, json!("c")]]
    );
}

#[test]
fn test_parse_interprets_cell_text() {
    assert_eq!(
        clipboard::parse("2.5\tfalse\t hi "),
        vec![vec![json!(2.5), json!(false), json!(" hi ")]]
    );
}

#[test]
fn test_parse_empty_text() {
    assert!(clipboard::parse("").is_empty());
}

#[test]
fn test_copied_text_pastes_back_unchanged() {
    let values = vec![
        vec![json!(10), json!("x")],
        vec![json!(-3), Value::Null],
    ];
    assert_eq!(clipboard::parse(&clipboard::serialize(&values)), values);
}

#[test]
fn test_whitespace_only_cells_survive_round_trip() {
    let values = vec![vec![json!(1), json!(true), json!("  ")]];
    let text = clipboard::serialize(&values);
    assert_eq!(clipboard::parse(&text), values);
    assert_eq!(clipboard::parse("\t \t"), vec![vec![Value::Null, json!(" "), Value::Null]]);
}
