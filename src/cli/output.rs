//! Output formatting for CLI commands.

use serde::Serialize;

use crate::aggregate::SentimentSummary;
use crate::cli::args::{OutputFormat, SentiraArgs};
use crate::error::Result;
use crate::sentiment::label::SentimentLabel;

/// Maximum width of a distribution bar, in characters.
const BAR_WIDTH: usize = 40;

/// Maximum preview text length, in characters.
const PREVIEW_TEXT_CHARS: usize = 72;

/// A command result that can render itself for humans.
pub trait Report: Serialize {
    /// Print the report in human-readable form.
    fn print_human(&self, args: &SentiraArgs);
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Report>(message: &str, result: &T, args: &SentiraArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 && !message.is_empty() {
                println!("{message}");
                println!();
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
            Ok(())
        }
    }
}

/// One classified row in the analyze preview.
#[derive(Debug, Serialize)]
pub struct PreviewRow {
    pub text: String,
    pub sentiment: SentimentLabel,
    pub confidence: f64,
}

/// Result structure for the analyze command.
#[derive(Debug, Serialize)]
pub struct AnalyzeReport {
    pub input: String,
    pub total_rows: usize,
    pub classified_rows: usize,
    pub skipped_rows: usize,
    pub summary: SentimentSummary,
    pub preview: Vec<PreviewRow>,
    pub duration_ms: u64,
    pub exported_to: Option<String>,
}

impl Report for AnalyzeReport {
    fn print_human(&self, args: &SentiraArgs) {
        if !self.preview.is_empty() {
            println!("Processed Data Sample:");
            println!("──────────────────────");
            for (i, row) in self.preview.iter().enumerate() {
                println!(
                    "{:>3}. [{:<8} {:+.2}] {}",
                    i + 1,
                    row.sentiment.to_string(),
                    row.confidence,
                    truncate_chars(&row.text, PREVIEW_TEXT_CHARS)
                );
            }
            println!();
        }

        println!("Sentiment Distribution:");
        println!("───────────────────────");
        print_distribution(&self.summary);
        println!();

        println!(
            "Rows classified: {} of {} ({} skipped)",
            self.classified_rows, self.total_rows, self.skipped_rows
        );
        if args.verbosity() > 1 {
            println!("Completed in {}ms", self.duration_ms);
        }
        if let Some(path) = &self.exported_to {
            println!("Exported to: {path}");
        }
    }
}

/// Result structure for one-off classification.
#[derive(Debug, Serialize)]
pub struct ClassifyReport {
    pub text: String,
    pub sentiment: SentimentLabel,
    pub confidence: f64,
}

impl Report for ClassifyReport {
    fn print_human(&self, _args: &SentiraArgs) {
        println!("Sentiment:  {}", self.sentiment);
        println!("Confidence: {:+.4}", self.confidence);
    }
}

/// Result structure for the columns command.
#[derive(Debug, Serialize)]
pub struct ColumnsReport {
    pub input: String,
    pub text_columns: Vec<String>,
}

impl Report for ColumnsReport {
    fn print_human(&self, _args: &SentiraArgs) {
        if self.text_columns.is_empty() {
            println!("No text columns detected in {}", self.input);
        } else {
            println!("Text columns in {}:", self.input);
            for column in &self.text_columns {
                println!("  {column}");
            }
        }
    }
}

/// Render the label counts as a terminal bar chart.
fn print_distribution(summary: &SentimentSummary) {
    let max = summary.iter().map(|(_, count)| *count).max().unwrap_or(0);
    for (label, count) in summary.iter() {
        let width = if max == 0 { 0 } else { count * BAR_WIDTH / max };
        println!("{:<9} {} {count}", label.to_string(), "█".repeat(width));
    }
}

/// Truncate to a character budget, appending an ellipsis when shortened.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
