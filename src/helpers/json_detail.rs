use std::io::{self, Write};
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::Value;

/// Single-line JSON with `", "` and `": "` separators and every character
/// outside printable ASCII written as a `\uXXXX` escape.
struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W: ?Sized + Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        for c in fragment.chars() {
            if (' '..='~').contains(&c) {
                write!(writer, "{}", c)?;
            } else {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Encodes an HTTP error detail the way it appears in escalated copilot failures.
pub fn encode_detail(value: &Value) -> String {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, SpacedAsciiFormatter);
    if value.serialize(&mut serializer).is_err() {
        return value.to_string();
    }

    String::from_utf8(out).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn separators_are_spaced() {
        assert_eq!(encode_detail(&json!({"error": "server error"})), r#"{"error": "server error"}"#);
        assert_eq!(
            encode_detail(&json!({"a": [1, 2, {"b": null}], "c": true})),
            r#"{"a": [1, 2, {"b": null}], "c": true}"#
        );
    }

    #[test]
    fn non_ascii_is_escaped() {
        assert_eq!(encode_detail(&json!({"msg": "café"})), r#"{"msg": "caf\u00e9"}"#);
        assert_eq!(encode_detail(&json!("😀")), r#""\ud83d\ude00""#);
        assert_eq!(encode_detail(&json!("\u{7f}")), r#""\u007f""#);
    }

    #[test]
    fn control_characters_keep_short_escapes() {
        assert_eq!(encode_detail(&json!("a\"b\\c\nd\te")), r#""a\"b\\c\nd\te""#);
        assert_eq!(encode_detail(&json!("\u{1}")), r#""\u0001""#);
    }

    #[test]
    fn empty_containers_stay_tight() {
        assert_eq!(encode_detail(&json!({})), "{}");
        assert_eq!(encode_detail(&json!([])), "[]");
    }
}
