//! Record model for tabular text data.
//!
//! # Core Components
//!
//! - [`record::Record`] - one input row as named field-value pairs
//! - [`record::RecordSet`] - an ordered batch of records with header order
//! - [`field_value::FieldValue`] - typed cell content with inference
//! - [`schema`] - text-column sniffing over a record set
//! - [`converter::csv`] - delimited-text reader and export writer

pub mod converter;
pub mod field_value;
pub mod record;
pub mod schema;

pub use converter::{CsvRecordReader, CsvRecordWriter};
pub use field_value::FieldValue;
pub use record::{Record, RecordSet};
pub use schema::sniff_text_columns;
