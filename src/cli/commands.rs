//! Command implementations for the Sentira CLI.

use std::time::Instant;

use log::info;

use crate::aggregate::{TextRule, classify_records};
use crate::cli::args::{AnalyzeArgs, ClassifyArgs, ColumnsArgs, Command, SentiraArgs};
use crate::cli::output::{
    AnalyzeReport, ClassifyReport, ColumnsReport, PreviewRow, output_result,
};
use crate::document::converter::{CsvRecordReader, CsvRecordWriter};
use crate::document::schema::sniff_text_columns;
use crate::error::Result;
use crate::sentiment::analyzer::SentimentAnalyzer;

/// Execute a CLI command.
pub fn execute_command(args: SentiraArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args.clone(), &args),
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::Columns(columns_args) => columns(columns_args.clone(), &args),
    }
}

/// Classify a delimited file and aggregate the distribution.
fn analyze(args: AnalyzeArgs, cli_args: &SentiraArgs) -> Result<()> {
    let start = Instant::now();

    let reader = CsvRecordReader::new().with_delimiter(args.delimiter)?;
    let set = reader.read_path(&args.input)?;
    info!("read {} rows from {}", set.len(), args.input.display());

    let rule = TextRule::for_record_set(&set, args.text_column.as_deref())?;
    let analyzer = SentimentAnalyzer::with_default_lexicon();
    let classified = classify_records(&analyzer, &set, &rule)?;

    let exported_to = match &args.output {
        Some(path) => {
            let writer = CsvRecordWriter::new().with_delimiter(args.delimiter)?;
            writer.write_path(path, &classified)?;
            Some(path.to_string_lossy().to_string())
        }
        None => None,
    };

    let preview = classified
        .records()
        .iter()
        .take(args.preview)
        .map(|row| PreviewRow {
            text: row.text.clone(),
            sentiment: row.sentiment,
            confidence: row.confidence,
        })
        .collect();

    let report = AnalyzeReport {
        input: args.input.to_string_lossy().to_string(),
        total_rows: set.len(),
        classified_rows: classified.records().len(),
        skipped_rows: set.len() - classified.records().len(),
        summary: classified.summary.clone(),
        preview,
        duration_ms: start.elapsed().as_millis() as u64,
        exported_to,
    };

    output_result("Sentiment analysis complete", &report, cli_args)
}

/// Classify a single piece of text.
fn classify(args: ClassifyArgs, cli_args: &SentiraArgs) -> Result<()> {
    let analyzer = SentimentAnalyzer::with_default_lexicon();
    let score = analyzer.classify(&args.text);

    let report = ClassifyReport {
        text: args.text,
        sentiment: score.label,
        confidence: score.compound,
    };

    output_result("", &report, cli_args)
}

/// Show the text-column candidates of a delimited file.
fn columns(args: ColumnsArgs, cli_args: &SentiraArgs) -> Result<()> {
    let reader = CsvRecordReader::new().with_delimiter(args.delimiter)?;
    let set = reader.read_path(&args.input)?;

    let report = ColumnsReport {
        input: args.input.to_string_lossy().to_string(),
        text_columns: sniff_text_columns(&set),
    };

    output_result("", &report, cli_args)
}
