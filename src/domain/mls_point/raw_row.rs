use serde_json::{Map, Value};
use std::collections::HashMap;

/// Lower-cases a column identifier and replaces spaces with `_`.
pub fn normalize_column_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// One row as loaded from the store, keyed by normalized column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    columns: HashMap<String, Value>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row from a JSON object, normalizing every key.
    ///
    /// When two source columns normalize to the same name the later one wins.
    pub fn from_json_object(object: Map<String, Value>) -> Self {
        let columns = object
            .into_iter()
            .map(|(key, value)| (normalize_column_name(&key), value))
            .collect();
        Self { columns }
    }

    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.columns
            .insert(normalize_column_name(column), value.into());
        self
    }

    /// Raw value of a column; `None` when the column is absent or null.
    pub fn value(&self, column: &str) -> Option<&Value> {
        self.columns.get(column).filter(|v| !v.is_null())
    }

    /// Column value coerced to text, so `5` and `"5"` compare equal.
    pub fn text(&self, column: &str) -> Option<String> {
        self.value(column).map(value_to_text)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

pub(super) fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// The process-lifetime snapshot of the source table.
#[derive(Debug, Clone, Default)]
pub struct MlsTable {
    rows: Vec<RawRow>,
}

impl MlsTable {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
