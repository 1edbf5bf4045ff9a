//! Converters between delimited text and record sets.

pub mod csv;

pub use csv::{CONFIDENCE_COLUMN, CsvRecordReader, CsvRecordWriter, SENTIMENT_COLUMN};
