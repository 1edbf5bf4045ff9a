//! Batch classification and aggregation.
//!
//! Given a record set and a text-producing rule, [`classify_records`] runs
//! the sentiment classifier over every row and returns the classified rows
//! together with a [`SentimentSummary`] (count per label).
//!
//! The text rule follows the input's shape: when both `Title` and
//! `Content` columns exist they are concatenated (missing values as empty
//! strings, joined with a single space); otherwise a single selected text
//! column is used. Rows whose resolved text is empty are skipped, so the
//! summary total equals the number of rows with non-empty resolved text.
//!
//! # Examples
//!
//! ```
//! use sentira::aggregate::{TextRule, classify_records};
//! use sentira::document::converter::CsvRecordReader;
//! use sentira::sentiment::SentimentAnalyzer;
//!
//! let csv = "Title,Content\nGood news,The new policy is wonderful\n";
//! let set = CsvRecordReader::new().read(csv.as_bytes()).unwrap();
//!
//! let analyzer = SentimentAnalyzer::with_default_lexicon();
//! let rule = TextRule::for_record_set(&set, None).unwrap();
//! let classified = classify_records(&analyzer, &set, &rule).unwrap();
//!
//! assert_eq!(classified.summary.total(), 1);
//! ```

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Serialize;

use crate::document::record::{Record, RecordSet};
use crate::document::schema::sniff_text_columns;
use crate::error::{Result, SentiraError};
use crate::sentiment::analyzer::SentimentAnalyzer;
use crate::sentiment::label::SentimentLabel;

/// How to resolve one record into the text handed to the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextRule {
    /// Concatenate the `Title` and `Content` fields, missing values as
    /// empty strings, joined with a single space.
    TitleAndContent,
    /// Use a single text column, missing values as empty strings.
    Column(String),
}

impl TextRule {
    /// Choose the text rule for a record set.
    ///
    /// When both `Title` and `Content` columns exist the concatenation rule
    /// wins. Otherwise `selected` names the column to use; with no
    /// selection, the first sniffed text column applies. Fails with a
    /// descriptive schema error when the set exposes no usable text column.
    pub fn for_record_set(set: &RecordSet, selected: Option<&str>) -> Result<TextRule> {
        if set.has_column("Title") && set.has_column("Content") {
            return Ok(TextRule::TitleAndContent);
        }

        let candidates = sniff_text_columns(set);
        if candidates.is_empty() {
            return Err(SentiraError::schema(
                "no valid text columns found; the data set needs at least one \
                 text field such as Title or Content",
            ));
        }

        match selected {
            Some(name) if candidates.iter().any(|c| c == name) => {
                Ok(TextRule::Column(name.to_string()))
            }
            Some(name) if set.has_column(name) => Err(SentiraError::schema(format!(
                "column '{name}' is not a text column (candidates: {})",
                candidates.join(", ")
            ))),
            Some(name) => Err(SentiraError::schema(format!(
                "column '{name}' does not exist (candidates: {})",
                candidates.join(", ")
            ))),
            None => Ok(TextRule::Column(candidates[0].clone())),
        }
    }

    /// Resolve the text of one record under this rule.
    pub fn resolve(&self, record: &Record) -> String {
        match self {
            TextRule::TitleAndContent => {
                let title = record.field_text("Title");
                let content = record.field_text("Content");
                format!("{title} {content}")
            }
            TextRule::Column(name) => record.field_text(name),
        }
    }
}

/// A record augmented with its classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedRecord {
    /// The source record, unchanged.
    pub record: Record,
    /// The resolved text the classifier saw.
    pub text: String,
    /// The assigned sentiment label.
    pub sentiment: SentimentLabel,
    /// The raw compound score, usable as a confidence display.
    pub confidence: f64,
}

/// Count of classified records per sentiment label.
///
/// Labels absent from the data are absent from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SentimentSummary {
    counts: BTreeMap<SentimentLabel, usize>,
}

impl SentimentSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        SentimentSummary {
            counts: BTreeMap::new(),
        }
    }

    /// Record one more occurrence of a label.
    pub fn increment(&mut self, label: SentimentLabel) {
        *self.counts.entry(label).or_insert(0) += 1;
    }

    /// The count for one label (0 when absent).
    pub fn count(&self, label: SentimentLabel) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    /// Total count across all labels.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over present labels and their counts, in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&SentimentLabel, &usize)> {
        self.counts.iter()
    }

    /// Whether no records were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// The outcome of one classify-and-aggregate pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedSet {
    /// Original column names in input order, for export.
    columns: Vec<String>,
    /// Successfully classified records, in input order.
    records: Vec<ClassifiedRecord>,
    /// Count per sentiment label.
    pub summary: SentimentSummary,
}

impl ClassifiedSet {
    /// Original column names in input order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The classified records in input order.
    pub fn records(&self) -> &[ClassifiedRecord] {
        &self.records
    }
}

/// Classify every record in a set and aggregate the label counts.
///
/// Rows whose resolved text is empty or whitespace are skipped. Rows
/// bearing the reserved `Error` label are excluded from both the output
/// and the summary; the classifier itself never produces that label, so
/// this filter only matters for pre-labeled data entering through other
/// paths. Fails when no row yields usable text.
pub fn classify_records(
    analyzer: &SentimentAnalyzer,
    set: &RecordSet,
    rule: &TextRule,
) -> Result<ClassifiedSet> {
    let mut records = Vec::new();
    let mut summary = SentimentSummary::new();
    let mut skipped_empty = 0usize;

    for record in set.records() {
        let text = rule.resolve(record);
        if text.trim().is_empty() {
            skipped_empty += 1;
            continue;
        }

        let score = analyzer.classify(&text);
        if score.label == SentimentLabel::Error {
            continue;
        }

        summary.increment(score.label);
        records.push(ClassifiedRecord {
            record: record.clone(),
            text,
            sentiment: score.label,
            confidence: score.compound,
        });
    }

    if skipped_empty > 0 {
        warn!("skipped {skipped_empty} rows with empty resolved text");
    }

    if records.is_empty() {
        return Err(SentiraError::analysis(
            "no valid text data found: every row's resolved text was empty",
        ));
    }

    debug!(
        "classified {} of {} rows ({} skipped)",
        records.len(),
        set.len(),
        skipped_empty
    );

    Ok(ClassifiedSet {
        columns: set.columns().to_vec(),
        records,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::converter::CsvRecordReader;

    fn read(csv: &str) -> RecordSet {
        CsvRecordReader::new().read(csv.as_bytes()).unwrap()
    }

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::with_default_lexicon()
    }

    #[test]
    fn test_title_content_rule_preferred() {
        let set = read("Title,Content,Note\na,b,c\n");
        let rule = TextRule::for_record_set(&set, Some("Note")).unwrap();
        assert_eq!(rule, TextRule::TitleAndContent);
    }

    #[test]
    fn test_title_content_concatenation() {
        let set = read("Title,Content\nGood news,\n");
        let rule = TextRule::TitleAndContent;
        // Null Content becomes an empty string, joined with one space.
        assert_eq!(rule.resolve(&set.records()[0]), "Good news ");
    }

    #[test]
    fn test_selected_column_rule() {
        let set = read("Date,Comment\n1660000000,a thoughtful remark\n");
        let rule = TextRule::for_record_set(&set, Some("Comment")).unwrap();
        assert_eq!(rule, TextRule::Column("Comment".to_string()));
        assert_eq!(rule.resolve(&set.records()[0]), "a thoughtful remark");
    }

    #[test]
    fn test_first_candidate_when_unselected() {
        let set = read("Date,Remark,Comment\n1,first text,second text\n");
        let rule = TextRule::for_record_set(&set, None).unwrap();
        assert_eq!(rule, TextRule::Column("Remark".to_string()));
    }

    #[test]
    fn test_no_text_columns_fails() {
        let set = read("Date,Score\n1660000000,42\n");
        let err = TextRule::for_record_set(&set, None).unwrap_err();
        assert!(err.to_string().contains("no valid text columns"));
    }

    #[test]
    fn test_selected_column_errors() {
        let set = read("Date,Score,Comment\n1,42,some text\n");
        assert!(TextRule::for_record_set(&set, Some("Score")).is_err());
        assert!(TextRule::for_record_set(&set, Some("Missing")).is_err());
    }

    #[test]
    fn test_summary_total_matches_non_empty_rows() {
        let set = read(
            "Title,Content\n\
             Great result,The policy is wonderful\n\
             ,\n\
             Awful outcome,This is a terrible failure\n\
             Weather update,The forecast mentions rain on Tuesday\n",
        );
        let classified =
            classify_records(&analyzer(), &set, &TextRule::TitleAndContent).unwrap();

        // Three rows had non-empty resolved text; the blank row is skipped.
        assert_eq!(classified.summary.total(), 3);
        assert_eq!(classified.records().len(), 3);
        assert_eq!(classified.summary.count(SentimentLabel::Positive), 1);
        assert_eq!(classified.summary.count(SentimentLabel::Negative), 1);
        assert_eq!(classified.summary.count(SentimentLabel::Neutral), 1);
        assert_eq!(classified.summary.count(SentimentLabel::Error), 0);
    }

    #[test]
    fn test_all_empty_rows_fail() {
        let set = read("Title,Content\n,\n,\n");
        let err =
            classify_records(&analyzer(), &set, &TextRule::TitleAndContent).unwrap_err();
        assert!(err.to_string().contains("no valid text data"));
    }

    #[test]
    fn test_confidence_matches_labels() {
        let set = read("Comment\nThis is an absolutely wonderful development\n");
        let rule = TextRule::Column("Comment".to_string());
        let classified = classify_records(&analyzer(), &set, &rule).unwrap();
        let row = &classified.records()[0];
        assert_eq!(row.sentiment, SentimentLabel::Positive);
        assert!(row.confidence > 0.05);
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = SentimentSummary::new();
        summary.increment(SentimentLabel::Positive);
        summary.increment(SentimentLabel::Positive);
        summary.increment(SentimentLabel::Neutral);
        assert_eq!(summary.count(SentimentLabel::Positive), 2);
        assert_eq!(summary.count(SentimentLabel::Negative), 0);
        assert_eq!(summary.total(), 3);
    }
}
