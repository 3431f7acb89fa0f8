pub mod loader;

pub use loader::load_records;

use crate::utils::{MbtiDataError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// One decoded row or entry: field name to scalar value, in source column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, JsonValue>);

/// Result of looking up a field on a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    Present(&'a JsonValue),
    Absent,
}

impl<'a> Field<'a> {
    pub fn value(self) -> Option<&'a JsonValue> {
        match self {
            Field::Present(v) => Some(v),
            Field::Absent => None,
        }
    }

    /// Absent fields and `null`, `false`, `0`, `""`, `[]`, `{}` are falsy.
    pub fn is_truthy(self) -> bool {
        match self {
            Field::Absent => false,
            Field::Present(v) => match v {
                JsonValue::Null => false,
                JsonValue::Bool(b) => *b,
                JsonValue::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
                JsonValue::String(s) => !s.is_empty(),
                JsonValue::Array(a) => !a.is_empty(),
                JsonValue::Object(o) => !o.is_empty(),
            },
        }
    }

    /// Treats absence as an error for the entry at `index`.
    pub fn require(self, index: usize, name: &str) -> Result<&'a JsonValue> {
        self.value().ok_or_else(|| MbtiDataError::MissingField {
            index,
            field: name.to_string(),
        })
    }
}

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn field(&self, name: &str) -> Field<'_> {
        match self.0.get(name) {
            Some(v) => Field::Present(v),
            None => Field::Absent,
        }
    }

    /// Inserts or replaces a value. A replaced key keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: JsonValue) {
        self.0.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
        self.0.iter()
    }
}

impl From<Map<String, JsonValue>> for Record {
    fn from(map: Map<String, JsonValue>) -> Self {
        Self(map)
    }
}
