//! Table assembly: parsed rows to JSON shapes and back.
//!
//! The first row of a table always supplies the header names. Shape
//! irregularities never fail a conversion: rows shorter than the header row
//! are padded with empty strings, extra cells are dropped, and a data row
//! with an empty key is skipped entirely in keyed-map output.
//!
//! The composed operations [`csv_to_json`] and [`json_to_csv`] live here as
//! well; they are the only functions in the module that can fail, and only on
//! a whole-document JSON problem.

use crate::coerce::{coerce, stringify};
use crate::detect::detect_separator;
use crate::error::{Error, Result};
use crate::options::{CoerceOptions, CsvOptions, OutputShape, Separator};
use crate::tokenize::split_rows;
use indexmap::IndexSet;
use serde_json::{Map, Value};

/// Builds one record per data row, keyed by header.
///
/// `rows[0]` is the header row (cells stringified after coercion). Each later
/// row maps positionally onto the headers; missing cells become empty
/// strings, cells beyond the header width are ignored.
///
/// # Examples
///
/// ```rust
/// use textshape::{rows_to_records, CoerceOptions};
///
/// let rows = vec![
///     vec!["name".to_string(), "age".to_string()],
///     vec!["Alice".to_string(), "30".to_string(), "extra".to_string()],
///     vec!["Bob".to_string()],
/// ];
/// let records = rows_to_records(&rows, &CoerceOptions::new());
/// assert_eq!(records[0].get("age").and_then(|v| v.as_str()), Some("30"));
/// assert_eq!(records[1].get("age").and_then(|v| v.as_str()), Some(""));
/// ```
#[must_use]
pub fn rows_to_records(rows: &[Vec<String>], options: &CoerceOptions) -> Vec<Map<String, Value>> {
    let coerced = coerce_rows(rows, options);
    let Some((header_row, data_rows)) = coerced.split_first() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_row.iter().map(stringify).collect();

    data_rows
        .iter()
        .map(|row| {
            let mut record = Map::new();
            for (index, header) in headers.iter().enumerate() {
                record.insert(header.clone(), cell_or_empty(row, index));
            }
            record
        })
        .collect()
}

/// Builds a single mapping keyed by each data row's first column.
///
/// Headers `1..N` label the remaining columns of the nested record. Rows
/// whose key cell is empty are skipped; colliding keys keep their first
/// position with the last value written.
///
/// # Examples
///
/// ```rust
/// use textshape::{rows_to_keyed_map, CoerceOptions};
///
/// let rows = vec![
///     vec!["id".to_string(), "name".to_string()],
///     vec!["a1".to_string(), "Alice".to_string()],
///     vec!["".to_string(), "skipped".to_string()],
/// ];
/// let keyed = rows_to_keyed_map(&rows, &CoerceOptions::new());
/// assert_eq!(keyed.len(), 1);
/// assert!(keyed.contains_key("a1"));
/// ```
#[must_use]
pub fn rows_to_keyed_map(rows: &[Vec<String>], options: &CoerceOptions) -> Map<String, Value> {
    let coerced = coerce_rows(rows, options);
    let Some((header_row, data_rows)) = coerced.split_first() else {
        return Map::new();
    };
    let headers: Vec<String> = header_row.iter().map(stringify).collect();
    let value_headers = headers.get(1..).unwrap_or_default();

    let mut keyed = Map::new();
    for row in data_rows {
        let key = row.first().map(stringify).unwrap_or_default();
        if key.is_empty() {
            continue;
        }
        let mut record = Map::new();
        for (index, header) in value_headers.iter().enumerate() {
            record.insert(header.clone(), cell_or_empty(row, index + 1));
        }
        keyed.insert(key, Value::Object(record));
    }
    keyed
}

/// Swaps rows and columns.
///
/// The output has one row per input column (up to the longest input row);
/// output row `c` collects cell `c` of every input row in order, padding
/// missing cells with empty strings. Applied twice to rectangular input it
/// returns the original.
///
/// # Examples
///
/// ```rust
/// use textshape::transpose;
///
/// let rows = vec![
///     vec!["a".to_string(), "b".to_string()],
///     vec!["c".to_string()],
/// ];
/// assert_eq!(
///     transpose(&rows),
///     vec![vec!["a".to_string(), "c".to_string()], vec!["b".to_string(), "".to_string()]]
/// );
/// ```
#[must_use]
pub fn transpose(rows: &[Vec<String>]) -> Vec<Vec<String>> {
    let max_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..max_cols)
        .map(|col| {
            rows.iter()
                .map(|row| row.get(col).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Converts CSV-style text to a JSON string.
///
/// The separator comes from `options.separator`, or the detection heuristic
/// when unset. Rows are parsed quote-aware, optionally transposed, coerced
/// per cell, shaped into records or a keyed map, and serialized pretty (2
/// spaces) or minified. Empty input produces `[]` in either shape.
///
/// # Errors
///
/// Never fails on malformed cells or ragged rows; the `Result` exists for
/// the final serialization step.
///
/// # Examples
///
/// ```rust
/// use textshape::{csv_to_json, CsvOptions};
///
/// let options = CsvOptions::new().with_parse_numbers(true).with_minify(true);
/// let json = csv_to_json("name,age\nAlice,30", &options).unwrap();
/// assert_eq!(json, "[{\"name\":\"Alice\",\"age\":30}]");
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn csv_to_json(input: &str, options: &CsvOptions) -> Result<String> {
    let separator = options
        .separator
        .unwrap_or_else(|| detect_separator(input));

    let mut rows = split_rows(input, separator);
    if options.transpose {
        rows = transpose(&rows);
    }

    let coerce_options = options.coerce_options();
    let output = if rows.is_empty() {
        Value::Array(Vec::new())
    } else {
        match options.output {
            OutputShape::Records => Value::Array(
                rows_to_records(&rows, &coerce_options)
                    .into_iter()
                    .map(Value::Object)
                    .collect(),
            ),
            OutputShape::Keyed => Value::Object(rows_to_keyed_map(&rows, &coerce_options)),
        }
    };

    let serialized = if options.minify {
        serde_json::to_string(&output)
    } else {
        serde_json::to_string_pretty(&output)
    };
    serialized.map_err(|e| Error::json(&e))
}

/// Converts a JSON document to delimited text.
///
/// # Errors
///
/// Fails only when the document itself does not parse; see [`value_to_rows`]
/// for how each JSON shape serializes.
///
/// # Examples
///
/// ```rust
/// use textshape::{json_to_csv, Separator};
///
/// let csv = json_to_csv(
///     "[{\"a\":1,\"b\":2},{\"a\":3,\"b\":4}]",
///     Separator::Comma,
/// ).unwrap();
/// assert_eq!(csv, "a,b\n1,2\n3,4");
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn json_to_csv(input: &str, separator: Separator) -> Result<String> {
    let parsed: Value = serde_json::from_str(input).map_err(|e| Error::json(&e))?;
    Ok(value_to_rows(&parsed, separator))
}

/// Serializes an already-parsed value to delimited text.
///
/// - array of arrays: each inner array is one row
/// - array of objects: header row is the first-seen union of all keys, then
///   one row per object with empty cells for missing or null fields
/// - any other non-empty array: `index<sep>value` lines
/// - object: `key<sep>value` lines
/// - empty array: empty string
/// - scalar: its string form
#[must_use]
pub fn value_to_rows(value: &Value, separator: Separator) -> String {
    let sep = separator.as_str();
    match value {
        Value::Array(rows) if !rows.is_empty() => match &rows[0] {
            Value::Array(_) => rows
                .iter()
                .map(|row| match row {
                    Value::Array(cells) => {
                        cells.iter().map(stringify).collect::<Vec<_>>().join(sep)
                    }
                    other => stringify(other),
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Value::Object(_) => objects_to_rows(rows, sep),
            _ => rows
                .iter()
                .enumerate()
                .map(|(index, item)| format!("{}{}{}", index, sep, stringify(item)))
                .collect::<Vec<_>>()
                .join("\n"),
        },
        Value::Array(_) => String::new(),
        Value::Object(map) => map
            .iter()
            .map(|(key, item)| format!("{}{}{}", key, sep, stringify(item)))
            .collect::<Vec<_>>()
            .join("\n"),
        scalar => stringify(scalar),
    }
}

fn objects_to_rows(rows: &[Value], sep: &str) -> String {
    let mut headers: IndexSet<&str> = IndexSet::new();
    for row in rows {
        if let Value::Object(map) = row {
            for key in map.keys() {
                headers.insert(key.as_str());
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.iter().copied().collect::<Vec<_>>().join(sep));
    for row in rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|header| {
                row.as_object()
                    .and_then(|map| map.get(*header))
                    .filter(|cell| !cell.is_null())
                    .map(stringify)
                    .unwrap_or_default()
            })
            .collect();
        lines.push(cells.join(sep));
    }
    lines.join("\n")
}

fn coerce_rows(rows: &[Vec<String>], options: &CoerceOptions) -> Vec<Vec<Value>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| coerce(cell, options)).collect())
        .collect()
}

fn cell_or_empty(row: &[Value], index: usize) -> Value {
    row.get(index)
        .cloned()
        .unwrap_or_else(|| Value::String(String::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(table: &[&[&str]]) -> Vec<Vec<String>> {
        table
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_records_pad_and_truncate() {
        let table = rows(&[&["a", "b"], &["1", "2", "3"], &["4"]]);
        let records = rows_to_records(&table, &CoerceOptions::new());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("a"), Some(&json!("1")));
        assert_eq!(records[0].get("b"), Some(&json!("2")));
        assert!(records[0].get("3").is_none());
        assert_eq!(records[1].get("b"), Some(&json!("")));
    }

    #[test]
    fn test_records_preserve_header_order() {
        let table = rows(&[&["z", "a"], &["1", "2"]]);
        let records = rows_to_records(&table, &CoerceOptions::new());
        let keys: Vec<_> = records[0].keys().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_keyed_map_skips_empty_keys_last_write_wins() {
        let table = rows(&[
            &["id", "name"],
            &["x", "first"],
            &["", "skipped"],
            &["x", "second"],
        ]);
        let keyed = rows_to_keyed_map(&table, &CoerceOptions::new());
        assert_eq!(keyed.len(), 1);
        assert_eq!(keyed["x"], json!({"name": "second"}));
    }

    #[test]
    fn test_keyed_map_numeric_keys_stringified() {
        let table = rows(&[&["id", "v"], &["10", "a"]]);
        let options = CoerceOptions::new().with_parse_numbers(true);
        let keyed = rows_to_keyed_map(&table, &options);
        assert!(keyed.contains_key("10"));
    }

    #[test]
    fn test_transpose_self_inverse_on_rectangles() {
        let table = rows(&[&["a", "b", "c"], &["d", "e", "f"]]);
        assert_eq!(transpose(&transpose(&table)), table);
    }

    #[test]
    fn test_transpose_empty() {
        assert!(transpose(&[]).is_empty());
    }

    #[test]
    fn test_csv_to_json_auto_detects() {
        let options = CsvOptions::new().with_minify(true);
        let json = csv_to_json("a;b\n1;2", &options).unwrap();
        assert_eq!(json, "[{\"a\":\"1\",\"b\":\"2\"}]");
    }

    #[test]
    fn test_csv_to_json_empty_input() {
        let options = CsvOptions::new().with_minify(true);
        assert_eq!(csv_to_json("", &options).unwrap(), "[]");
        let keyed = CsvOptions::new()
            .with_minify(true)
            .with_output(OutputShape::Keyed);
        assert_eq!(csv_to_json("\n\n", &keyed).unwrap(), "[]");
    }

    #[test]
    fn test_json_to_csv_array_of_arrays() {
        let csv = json_to_csv("[[1,2],[3,4]]", Separator::Pipe).unwrap();
        assert_eq!(csv, "1|2\n3|4");
    }

    #[test]
    fn test_json_to_csv_key_union_first_seen() {
        let csv = json_to_csv(
            "[{\"a\":1},{\"b\":2,\"a\":3},{\"c\":4}]",
            Separator::Comma,
        )
        .unwrap();
        assert_eq!(csv, "a,b,c\n1,,\n3,2,\n,,4");
    }

    #[test]
    fn test_json_to_csv_flat_object() {
        let csv = json_to_csv("{\"x\":1,\"y\":\"two\"}", Separator::Comma).unwrap();
        assert_eq!(csv, "x,1\ny,two");
    }

    #[test]
    fn test_json_to_csv_scalar_array_uses_indices() {
        let csv = json_to_csv("[\"a\",\"b\"]", Separator::Comma).unwrap();
        assert_eq!(csv, "0,a\n1,b");
    }

    #[test]
    fn test_json_to_csv_scalar_and_empty_array() {
        assert_eq!(json_to_csv("42", Separator::Comma).unwrap(), "42");
        assert_eq!(json_to_csv("[]", Separator::Comma).unwrap(), "");
    }

    #[test]
    fn test_json_to_csv_rejects_invalid_document() {
        assert!(json_to_csv("{oops", Separator::Comma).is_err());
    }

    #[test]
    fn test_round_trip_without_coercion() {
        let input = "a,b\n1,2\n3,4";
        let json = csv_to_json(
            input,
            &CsvOptions::new().with_separator(Separator::Comma).with_minify(true),
        )
        .unwrap();
        let back = json_to_csv(&json, Separator::Comma).unwrap();
        assert_eq!(back, input);
    }
}
