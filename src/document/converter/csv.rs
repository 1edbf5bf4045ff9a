//! CSV record reader and writer.
//!
//! The first row is treated as the header containing column names; each
//! subsequent row becomes a [`Record`] with inferred field values. The
//! writer is the inverse: it renders a classified set as delimited text,
//! all original columns in original order plus the `Sentiment` and
//! `Confidence Score` columns, so an export re-reads losslessly.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::debug;

use crate::aggregate::ClassifiedSet;
use crate::document::field_value::FieldValue;
use crate::document::record::{Record, RecordSet};
use crate::error::{Result, SentiraError};

/// Header name of the sentiment column in exports.
pub const SENTIMENT_COLUMN: &str = "Sentiment";

/// Header name of the confidence column in exports.
pub const CONFIDENCE_COLUMN: &str = "Confidence Score";

/// Validate a user-supplied delimiter down to its single byte.
fn delimiter_byte(delimiter: char) -> Result<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(SentiraError::invalid_operation(format!(
            "delimiter '{delimiter}' is not an ASCII character"
        )))
    }
}

/// A reader for delimited record files.
///
/// Supports a custom delimiter, whitespace trimming, and flexible row
/// lengths. Empty cells become [`FieldValue::Null`].
#[derive(Debug, Clone)]
pub struct CsvRecordReader {
    /// CSV delimiter character (default: ',')
    delimiter: u8,
    /// Whether to trim whitespace from fields
    trim: bool,
    /// Whether to allow flexible field counts
    flexible: bool,
}

impl Default for CsvRecordReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvRecordReader {
    /// Create a new reader with comma delimiter.
    pub fn new() -> Self {
        CsvRecordReader {
            delimiter: b',',
            trim: true,
            flexible: false,
        }
    }

    /// Set a custom delimiter character.
    ///
    /// Fails when the delimiter is not a single ASCII character, since
    /// delimited text splits on one byte.
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        self.delimiter = delimiter_byte(delimiter)?;
        Ok(self)
    }

    /// Set whether to trim whitespace from fields.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Set whether to allow flexible field counts.
    pub fn with_flexible(mut self, flexible: bool) -> Self {
        self.flexible = flexible;
        self
    }

    /// Read all records from the given input.
    pub fn read<R: Read>(&self, input: R) -> Result<RecordSet> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(self.flexible)
            .from_reader(input);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(SentiraError::parse("CSV header is empty"));
        }

        let columns: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let mut set = RecordSet::new(columns.clone());

        for row in reader.records() {
            let row = row?;
            let mut record = Record::new();
            for (name, value) in columns.iter().zip(row.iter()) {
                record.add_field(name.clone(), FieldValue::infer(value));
            }
            set.push(record);
        }

        debug!(
            "read {} records with {} columns",
            set.len(),
            set.columns().len()
        );
        Ok(set)
    }

    /// Read all records from a file path.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<RecordSet> {
        let file = File::open(path)?;
        self.read(file)
    }
}

/// A writer for classified record sets.
#[derive(Debug, Clone)]
pub struct CsvRecordWriter {
    /// CSV delimiter character (default: ',')
    delimiter: u8,
}

impl Default for CsvRecordWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvRecordWriter {
    /// Create a new writer with comma delimiter.
    pub fn new() -> Self {
        CsvRecordWriter { delimiter: b',' }
    }

    /// Set a custom delimiter character.
    ///
    /// Fails when the delimiter is not a single ASCII character.
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        self.delimiter = delimiter_byte(delimiter)?;
        Ok(self)
    }

    /// Write a classified set as delimited text.
    pub fn write<W: Write>(&self, output: W, set: &ClassifiedSet) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(output);

        let mut header: Vec<&str> = set.columns().iter().map(|c| c.as_str()).collect();
        header.push(SENTIMENT_COLUMN);
        header.push(CONFIDENCE_COLUMN);
        writer.write_record(&header)?;

        for classified in set.records() {
            let mut row: Vec<String> = set
                .columns()
                .iter()
                .map(|name| classified.record.field_text(name))
                .collect();
            row.push(classified.sentiment.to_string());
            row.push(classified.confidence.to_string());
            writer.write_record(&row)?;
        }

        writer.flush()?;
        debug!("wrote {} classified records", set.records().len());
        Ok(())
    }

    /// Write a classified set to a file path.
    pub fn write_path<P: AsRef<Path>>(&self, path: P, set: &ClassifiedSet) -> Result<()> {
        let file = File::create(path)?;
        self.write(file, set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_parsing() {
        let reader = CsvRecordReader::new();
        let csv = "Title,Date,Score\nNew transit plan,1660000000,0.5";
        let set = reader.read(csv.as_bytes()).unwrap();

        assert_eq!(set.columns(), ["Title", "Date", "Score"]);
        assert_eq!(set.len(), 1);

        let record = &set.records()[0];
        assert_eq!(
            record.get_field("Title").unwrap().as_text(),
            Some("New transit plan")
        );
        assert_eq!(
            record.get_field("Date").unwrap(),
            &FieldValue::Integer(1660000000)
        );
        assert_eq!(record.get_field("Score").unwrap(), &FieldValue::Float(0.5));
    }

    #[test]
    fn test_empty_cells_become_null() {
        let reader = CsvRecordReader::new();
        let set = reader
            .read("Title,Content\nA headline,\n".as_bytes())
            .unwrap();
        assert!(set.records()[0].get_field("Content").unwrap().is_null());
    }

    #[test]
    fn test_quoted_fields() {
        let reader = CsvRecordReader::new();
        let csv = "Title,Content\n\"Taxes, fees\",\"He said \"\"no\"\"\"";
        let set = reader.read(csv.as_bytes()).unwrap();
        let record = &set.records()[0];
        assert_eq!(record.field_text("Title"), "Taxes, fees");
        assert_eq!(record.field_text("Content"), "He said \"no\"");
    }

    #[test]
    fn test_custom_delimiter() {
        let reader = CsvRecordReader::new().with_delimiter('\t').unwrap();
        let set = reader
            .read("Title\tContent\nA headline\tBody text".as_bytes())
            .unwrap();
        assert_eq!(set.records()[0].field_text("Content"), "Body text");
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let err = CsvRecordReader::new().with_delimiter('；').unwrap_err();
        assert!(err.to_string().contains("not an ASCII character"));
        assert!(CsvRecordWriter::new().with_delimiter('§').is_err());
    }

    #[test]
    fn test_field_count_mismatch() {
        let reader = CsvRecordReader::new();
        let result = reader.read("Title,Content\nonly one".as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn test_flexible_rows() {
        let reader = CsvRecordReader::new().with_flexible(true);
        let set = reader.read("Title,Content\nonly one".as_bytes()).unwrap();
        let record = &set.records()[0];
        assert!(record.has_field("Title"));
        assert!(!record.has_field("Content"));
    }

    #[test]
    fn test_header_only_is_empty_set() {
        let reader = CsvRecordReader::new();
        let set = reader.read("Title,Content\n".as_bytes()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.columns().len(), 2);
    }
}
