//! Tab/newline text used for copy and paste between the table and the
//! system clipboard.

use serde_json::Value;

use crate::state::data_model;

/// Joins cells with tabs and rows with `\r\n`. `null` becomes an empty cell.
pub fn serialize(values: &[Vec<Value>]) -> String {
    values
        .iter()
        .map(|row| {
            row.iter()
                .map(data_model::display_value)
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\r\n")
}

/// Splits clipboard text back into a value grid.
///
/// Accepts `\n` or `\r\n` row separators and ignores one trailing line
/// break. Empty cells are kept so columns stay aligned.
pub fn parse(text: &str) -> Vec<Vec<Value>> {
    if text.is_empty() {
        return Vec::new();
    }
    let text = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text);

    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| line.split('\t').map(data_model::parse_cell_input).collect())
        .collect()
}
