pub mod formatter;

pub use formatter::AsciiPrettyFormatter;

use crate::utils::Result;
use serde::Serialize;
use std::path::Path;

/// How non-ASCII characters appear in string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    Literal,
    AsciiEscaped,
}

/// Serializes `value` as two-space indented JSON.
pub fn to_pretty_bytes<T: Serialize + ?Sized>(value: &T, style: JsonStyle) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match style {
        JsonStyle::Literal => {
            let mut ser = serde_json::Serializer::pretty(&mut buf);
            value.serialize(&mut ser)?;
        }
        JsonStyle::AsciiEscaped => {
            let mut ser =
                serde_json::Serializer::with_formatter(&mut buf, AsciiPrettyFormatter::new());
            value.serialize(&mut ser)?;
        }
    }
    Ok(buf)
}

/// Writes the whole document at once, creating the parent directory first and
/// replacing any existing file. Nothing is written if serialization fails.
pub fn write_json_file<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    style: JsonStyle,
) -> Result<()> {
    let bytes = to_pretty_bytes(value, style)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn literal_style_keeps_unicode() {
        let bytes = to_pretty_bytes(&json!([{"name": "Zoë 🎵"}]), JsonStyle::Literal).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "[\n  {\n    \"name\": \"Zoë 🎵\"\n  }\n]"
        );
    }

    #[test]
    fn ascii_style_escapes_with_surrogates() {
        let bytes =
            to_pretty_bytes(&json!([{"name": "Zoë 🎵"}]), JsonStyle::AsciiEscaped).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "[\n  {\n    \"name\": \"Zo\\u00eb \\ud83c\\udfb5\"\n  }\n]"
        );
    }

    #[test]
    fn ascii_style_still_escapes_control_characters() {
        let bytes = to_pretty_bytes(&json!("a\"b\nc"), JsonStyle::AsciiEscaped).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "\"a\\\"b\\nc\"");
    }

    #[test]
    fn empty_array_is_compact() {
        let empty: Vec<u8> = Vec::new();
        let bytes = to_pretty_bytes(&empty, JsonStyle::AsciiEscaped).unwrap();
        assert_eq!(bytes, b"[]");
    }

    #[test]
    fn write_creates_parent_directories_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/report.json");
        write_json_file(&path, &json!([1, 2]), JsonStyle::Literal).unwrap();
        write_json_file(&path, &json!([3]), JsonStyle::Literal).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[\n  3\n]");
    }
}
