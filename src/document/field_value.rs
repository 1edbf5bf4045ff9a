//! Field value types for records.
//!
//! [`FieldValue`] represents the typed content of one cell in a tabular
//! record. Values arrive as strings from delimited text and are inferred
//! into the narrowest matching type; [`FieldValue::to_csv_field`] renders
//! them back so an export round-trips cleanly.
//!
//! # Examples
//!
//! ```
//! use sentira::document::field_value::FieldValue;
//!
//! assert_eq!(FieldValue::infer("2024"), FieldValue::Integer(2024));
//! assert_eq!(FieldValue::infer("19.99"), FieldValue::Float(19.99));
//! assert_eq!(FieldValue::infer("true"), FieldValue::Boolean(true));
//! assert_eq!(
//!     FieldValue::infer("hello"),
//!     FieldValue::Text("hello".to_string())
//! );
//! assert_eq!(FieldValue::infer(""), FieldValue::Null);
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Represents a value for a field in a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// DateTime value (RFC 3339 in delimited text)
    DateTime(DateTime<Utc>),
    /// Null value (empty cell)
    Null,
}

impl FieldValue {
    /// Infer the narrowest field value type from a string.
    ///
    /// Tried in order: empty, boolean, integer, float, RFC 3339 datetime,
    /// and finally text.
    pub fn infer(value: &str) -> FieldValue {
        if value.is_empty() {
            return FieldValue::Null;
        }

        if value.eq_ignore_ascii_case("true") {
            return FieldValue::Boolean(true);
        }
        if value.eq_ignore_ascii_case("false") {
            return FieldValue::Boolean(false);
        }

        if let Ok(int_val) = value.parse::<i64>() {
            return FieldValue::Integer(int_val);
        }

        if let Ok(float_val) = value.parse::<f64>() {
            return FieldValue::Float(float_val);
        }

        if let Ok(dt) = value.parse::<DateTime<Utc>>() {
            return FieldValue::DateTime(dt);
        }

        FieldValue::Text(value.to_string())
    }

    /// Borrow the text content if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this value is genuinely string-typed.
    pub fn is_textual(&self) -> bool {
        matches!(self, FieldValue::Text(_))
    }

    /// Whether this value is a null (empty cell).
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Render this value as a delimited-text cell.
    ///
    /// Inverse of [`FieldValue::infer`]: nulls become empty cells,
    /// datetimes render as RFC 3339 with a `Z` suffix, and floats always
    /// keep a decimal point (`0.0` renders as `"0.0"`, not `"0"`) so a
    /// re-read infers them back as floats.
    pub fn to_csv_field(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Float(f) => format!("{f:?}"),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
            FieldValue::Null => String::new(),
        }
    }
}
