//! # VALUE AND BODY-SHAPE DEFINITIONS
//!
//! **PURPOSE**: The values a field rule inspects and the body shapes a request
//! can carry.

use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;

/// **FIELD VALUE**
///
/// A single candidate value pulled from a URL parameter, a form entry, a JSON
/// property or a raw body payload.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// URL parameters, form entries, JSON strings and text bodies
    Text(String),

    /// JSON numbers
    Number(serde_json::Number),

    /// JSON booleans
    Bool(bool),

    /// JSON `null`
    Null,

    /// Raw binary payloads
    Bytes(Vec<u8>),

    /// Nested JSON arrays and objects
    Structured(serde_json::Value),
}

impl FieldValue {
    /// **PRESENCE CHECK**
    ///
    /// Empty text, zero, `false` and `null` count as absent. Required fields
    /// supplying any of them are rejected as missing, never as mismatches.
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.is_empty(),
            FieldValue::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
            FieldValue::Bool(flag) => *flag,
            FieldValue::Null => false,
            FieldValue::Bytes(_) | FieldValue::Structured(_) => true,
        }
    }

    /// **TYPE NAME** - matched against literal strategies
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "string",
            FieldValue::Number(_) => "number",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Null | FieldValue::Bytes(_) | FieldValue::Structured(_) => "object",
        }
    }

    /// Textual content of string-like values. Binary payloads are decoded
    /// lossily; every other variant yields `None`.
    pub fn decoded_text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Text(text) => Some(Cow::Borrowed(text)),
            FieldValue::Bytes(bytes) => Some(String::from_utf8_lossy(bytes)),
            _ => None,
        }
    }

    /// Textual rendering of any variant, used for integer parsing and for the
    /// `Value:` clause of rejection messages.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Number(number) => Cow::Owned(number.to_string()),
            FieldValue::Bool(flag) => Cow::Owned(flag.to_string()),
            FieldValue::Null => Cow::Borrowed("null"),
            FieldValue::Structured(value) => Cow::Owned(value.to_string()),
            FieldValue::Text(_) | FieldValue::Bytes(_) => {
                self.decoded_text().unwrap_or(Cow::Borrowed(""))
            }
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(bytes: Vec<u8>) -> Self {
        FieldValue::Bytes(bytes)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => FieldValue::Text(text),
            serde_json::Value::Number(number) => FieldValue::Number(number),
            serde_json::Value::Bool(flag) => FieldValue::Bool(flag),
            serde_json::Value::Null => FieldValue::Null,
            structured => FieldValue::Structured(structured),
        }
    }
}

/// **BODY SHAPE**
///
/// The parsed form of a request body, as reported in `INVALID_BODY` messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyShape {
    Form,
    Json,
    Text,
    Raw,
    None,
}

impl BodyShape {
    pub fn as_str(self) -> &'static str {
        match self {
            BodyShape::Form => "form",
            BodyShape::Json => "json",
            BodyShape::Text => "text",
            BodyShape::Raw => "raw",
            BodyShape::None => "none",
        }
    }
}

impl fmt::Display for BodyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_values_are_absent() {
        assert!(!FieldValue::from("").is_present());
        assert!(!FieldValue::from(json!(0)).is_present());
        assert!(!FieldValue::from(json!(0.0)).is_present());
        assert!(!FieldValue::from(json!(false)).is_present());
        assert!(!FieldValue::from(json!(null)).is_present());
    }

    #[test]
    fn test_truthy_values_are_present() {
        assert!(FieldValue::from("0").is_present());
        assert!(FieldValue::from(json!(-1)).is_present());
        assert!(FieldValue::from(json!(true)).is_present());
        assert!(FieldValue::from(json!([])).is_present());
        assert!(FieldValue::from(Vec::new()).is_present());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(FieldValue::from("b").type_name(), "string");
        assert_eq!(FieldValue::from(json!(2)).type_name(), "number");
        assert_eq!(FieldValue::from(json!(true)).type_name(), "boolean");
        assert_eq!(FieldValue::from(json!({"x": 1})).type_name(), "object");
        assert_eq!(FieldValue::from(b"raw".to_vec()).type_name(), "object");
    }

    #[test]
    fn test_decoded_text_only_for_string_like() {
        assert_eq!(FieldValue::from(b"abc".to_vec()).decoded_text().as_deref(), Some("abc"));
        assert!(FieldValue::from(json!(2)).decoded_text().is_none());
    }

    #[test]
    fn test_display_renders_text() {
        assert_eq!(FieldValue::from(json!(2)).to_string(), "2");
        assert_eq!(FieldValue::from(json!(true)).to_string(), "true");
        assert_eq!(FieldValue::from(json!(["a", 1])).to_string(), r#"["a",1]"#);
    }

    #[test]
    fn test_body_shape_names() {
        assert_eq!(BodyShape::Form.to_string(), "form");
        let shape: BodyShape = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(shape, BodyShape::Json);
    }
}
