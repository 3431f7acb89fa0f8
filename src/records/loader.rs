use crate::records::Record;
use crate::utils::{MbtiDataError, Result};
use serde_json::Value as JsonValue;
use std::path::Path;

/// Reads a JSON array of objects. Any other top-level shape, or a
/// non-object element, is an error.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        return Err(MbtiDataError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_records(&content, path)
}

fn parse_records(content: &str, path: &Path) -> Result<Vec<Record>> {
    let value: JsonValue = serde_json::from_str(content)?;
    let JsonValue::Array(entries) = value else {
        return Err(MbtiDataError::NotARecordArray(path.display().to_string()));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            JsonValue::Object(map) => Ok(Record::from(map)),
            _ => Err(MbtiDataError::NotARecord { index }),
        })
        .collect()
}
