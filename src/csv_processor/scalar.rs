use serde::Serialize;
use serde_json::{Number, Value as JsonValue};

/// A CSV cell after type coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Integer(i64),
    UnsignedInteger(u64),
    Real(f64),
    Text(String),
}

/// Coerces one raw cell. The value is trimmed first; digits-only becomes an
/// integer, digits with a single decimal point become a real, anything else
/// (including integers too wide for 64 bits) stays text.
pub fn parse_scalar(raw: &str) -> ScalarValue {
    let value = raw.trim();

    if is_ascii_digits(value) {
        if let Ok(n) = value.parse::<i64>() {
            return ScalarValue::Integer(n);
        }
        if let Ok(n) = value.parse::<u64>() {
            return ScalarValue::UnsignedInteger(n);
        }
        return ScalarValue::Text(value.to_string());
    }

    if value.matches('.').count() == 1 && is_ascii_digits(&value.replacen('.', "", 1)) {
        return match value.parse::<f64>() {
            Ok(f) if f.is_finite() => ScalarValue::Real(f),
            _ => ScalarValue::Text(value.to_string()),
        };
    }

    ScalarValue::Text(value.to_string())
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl From<ScalarValue> for JsonValue {
    fn from(value: ScalarValue) -> Self {
        match value {
            ScalarValue::Integer(n) => JsonValue::Number(n.into()),
            ScalarValue::UnsignedInteger(n) => JsonValue::Number(n.into()),
            ScalarValue::Real(f) => Number::from_f64(f)
                .map(JsonValue::Number)
                .unwrap_or_else(|| JsonValue::String(f.to_string())),
            ScalarValue::Text(s) => JsonValue::String(s),
        }
    }
}
