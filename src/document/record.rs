//! Record and record-set structures.
//!
//! A [`Record`] is one input row: a schema-less collection of named field
//! values, built dynamically from whatever columns the input carries. A
//! [`RecordSet`] is an ordered batch of records together with the header
//! order, which exports must preserve.
//!
//! # Examples
//!
//! ```
//! use sentira::document::record::Record;
//!
//! let record = Record::builder()
//!     .add_text("Title", "New transit plan announced")
//!     .add_text("Content", "The council approved the proposal")
//!     .add_integer("Date", 1660000000)
//!     .build();
//!
//! assert_eq!(record.len(), 3);
//! assert!(record.has_field("Title"));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::document::field_value::FieldValue;

/// A record represents a single row of input data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    /// The field values for this record.
    fields: HashMap<String, FieldValue>,
}

impl Record {
    /// Create a new empty record.
    pub fn new() -> Self {
        Record {
            fields: HashMap::new(),
        }
    }

    /// Add a field value to the record.
    pub fn add_field<S: Into<String>>(&mut self, name: S, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Get a field value from the record.
    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Check if the record has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The field's content rendered as text, with missing and null fields
    /// rendered as the empty string.
    pub fn field_text(&self, name: &str) -> String {
        self.fields
            .get(name)
            .map(FieldValue::to_csv_field)
            .unwrap_or_default()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Create a builder for constructing records.
    pub fn builder() -> RecordBuilder {
        RecordBuilder::new()
    }
}

/// A builder for constructing records in a fluent manner.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Create a new record builder.
    pub fn new() -> Self {
        RecordBuilder {
            record: Record::new(),
        }
    }

    /// Add a text field to the record.
    pub fn add_text<S: Into<String>, T: Into<String>>(mut self, name: S, value: T) -> Self {
        self.record.add_field(name, FieldValue::Text(value.into()));
        self
    }

    /// Add an integer field to the record.
    pub fn add_integer<S: Into<String>>(mut self, name: S, value: i64) -> Self {
        self.record.add_field(name, FieldValue::Integer(value));
        self
    }

    /// Add a float field to the record.
    pub fn add_float<S: Into<String>>(mut self, name: S, value: f64) -> Self {
        self.record.add_field(name, FieldValue::Float(value));
        self
    }

    /// Add a null field to the record.
    pub fn add_null<S: Into<String>>(mut self, name: S) -> Self {
        self.record.add_field(name, FieldValue::Null);
        self
    }

    /// Build the final record.
    pub fn build(self) -> Record {
        self.record
    }
}

/// An ordered batch of records with their header order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordSet {
    /// Column names in input order.
    columns: Vec<String>,
    /// The records, in input order.
    records: Vec<Record>,
}

impl RecordSet {
    /// Create a record set with the given header.
    pub fn new(columns: Vec<String>) -> Self {
        RecordSet {
            columns,
            records: Vec::new(),
        }
    }

    /// Column names in input order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Whether the set has a column of this exact name.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// The records in input order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Append a record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = Record::builder()
            .add_text("Title", "A headline")
            .add_integer("Date", 1660000000)
            .add_null("Content")
            .build();

        assert_eq!(record.len(), 3);
        assert_eq!(
            record.get_field("Title").unwrap().as_text(),
            Some("A headline")
        );
        assert!(record.get_field("Content").unwrap().is_null());
    }

    #[test]
    fn test_field_text_defaults_to_empty() {
        let record = Record::builder().add_null("Content").build();
        assert_eq!(record.field_text("Content"), "");
        assert_eq!(record.field_text("Missing"), "");
    }

    #[test]
    fn test_record_set() {
        let mut set = RecordSet::new(vec!["Title".to_string(), "Content".to_string()]);
        assert!(set.has_column("Title"));
        assert!(!set.has_column("title"));
        assert!(set.is_empty());

        set.push(Record::builder().add_text("Title", "x").build());
        assert_eq!(set.len(), 1);
    }
}
