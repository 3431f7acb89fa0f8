use crate::utils::{MbtiDataError, Result};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Grouping key taken from a record field (normally an MBTI type such as
/// `INTJ`). Any scalar JSON value can be a label; arrays and objects cannot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Label(JsonValue);

impl Label {
    pub fn from_value(value: &JsonValue, index: usize, field: &str) -> Result<Self> {
        match value {
            JsonValue::Array(_) | JsonValue::Object(_) => Err(MbtiDataError::UnhashableLabel {
                index,
                field: field.to_string(),
            }),
            v => Ok(Self(v.clone())),
        }
    }

    pub fn as_json(&self) -> &JsonValue {
        &self.0
    }
}

impl Hash for Label {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_string().hash(state);
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            JsonValue::String(s) => f.write_str(s),
            JsonValue::Null => f.write_str("None"),
            other => write!(f, "{}", other),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self(JsonValue::String(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_are_labels() {
        assert_eq!(
            Label::from_value(&json!("INTJ"), 0, "type").unwrap(),
            Label::from("INTJ")
        );
        assert_eq!(
            Label::from_value(&json!(7), 0, "type").unwrap().to_string(),
            "7"
        );
        assert_eq!(
            Label::from_value(&JsonValue::Null, 0, "type").unwrap().to_string(),
            "None"
        );
    }

    #[test]
    fn containers_are_rejected() {
        assert!(matches!(
            Label::from_value(&json!(["INTJ"]), 4, "type"),
            Err(MbtiDataError::UnhashableLabel { index: 4, .. })
        ));
        assert!(Label::from_value(&json!({"a": 1}), 0, "type").is_err());
    }
}
