//! JSON data frames as a table source.
//!
//! Accepts the two layouts data-frame libraries commonly write:
//!
//! - records: `[{"name": "Tea", "price": 3}, ...]`, column order taken from
//!   the first record
//! - split: `{"columns": [...], "data": [[...], ...]}`, as written by pandas
//!   with `orient="split"` (an `index` member is ignored). Column labels may
//!   be any JSON value and are stringified like cells, so pandas' default
//!   integer labels work.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::elements::TableSource;
use crate::error::{Error, Result};

/// Column names and stringified cells parsed from JSON.
///
/// ```
/// use balisage::elements::{TableOptions, table_from_source};
/// use balisage::frame::JsonFrame;
///
/// let frame = JsonFrame::from_json(r#"[{"item": "Tea", "qty": 2}]"#)?;
/// let table = table_from_source(&frame, &TableOptions::default())?;
/// assert!(table.render().contains(r#"<td class="qty">2</td>"#));
/// # Ok::<(), balisage::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonFrame {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

#[derive(Deserialize)]
struct SplitFrame {
    columns: Vec<Value>,
    data: Vec<Vec<Value>>,
}

impl JsonFrame {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Parse a frame from JSON text.
    ///
    /// Malformed JSON fails with [`Error::Json`]; well-formed JSON in neither
    /// layout fails with [`Error::InvalidFrame`].
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build a frame from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(records) => Self::from_records(records),
            Value::Object(object) => Self::from_split(object),
            other => Err(Error::InvalidFrame(format!(
                "expected an array of records or a split object, found {}",
                kind(&other)
            ))),
        }
    }

    fn from_records(records: Vec<Value>) -> Result<Self> {
        let mut objects = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match record {
                Value::Object(object) => objects.push(object),
                other => {
                    return Err(Error::InvalidFrame(format!(
                        "record {index} is {}, not an object",
                        kind(&other)
                    )));
                }
            }
        }

        let columns: Vec<String> = objects
            .first()
            .map(|first| first.keys().cloned().collect())
            .unwrap_or_default();

        let rows = objects
            .iter()
            .map(|object| {
                columns
                    .iter()
                    .map(|column| object.get(column).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();

        Ok(Self { columns, rows })
    }

    fn from_split(object: Map<String, Value>) -> Result<Self> {
        let split: SplitFrame = serde_json::from_value(Value::Object(object))
            .map_err(|e| Error::InvalidFrame(e.to_string()))?;

        let width = split.columns.len();
        let mut rows = Vec::with_capacity(split.data.len());
        for (index, row) in split.data.iter().enumerate() {
            if row.len() != width {
                return Err(Error::InvalidFrame(format!(
                    "row {index} has {} cells, expected {width}",
                    row.len()
                )));
            }
            rows.push(row.iter().map(cell_text).collect());
        }

        Ok(Self {
            columns: split.columns.iter().map(cell_text).collect(),
            rows,
        })
    }
}

impl TableSource for JsonFrame {
    fn columns(&self) -> Vec<String> {
        self.columns.clone()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows.clone()
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        // Numbers, booleans and nested values print as compact JSON
        other => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
