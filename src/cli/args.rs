//! Command line argument parsing for the Sentira CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Sentira - lexicon-based sentiment analysis for tabular text data
#[derive(Parser, Debug, Clone)]
#[command(name = "sentira")]
#[command(about = "Lexicon-based sentiment analysis for tabular text data")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SentiraArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SentiraArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify a delimited file and show the sentiment distribution
    Analyze(AnalyzeArgs),

    /// Classify a single piece of text
    Classify(ClassifyArgs),

    /// Show the text-column candidates of a delimited file
    Columns(ColumnsArgs),
}

/// Arguments for analyzing a file
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the delimited input file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Text column to classify (default: Title+Content when present,
    /// otherwise the first detected text column)
    #[arg(short, long)]
    pub text_column: Option<String>,

    /// Write the classified records to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Number of classified rows to show in the sample
    #[arg(long, default_value = "10")]
    pub preview: usize,
}

/// Arguments for one-off classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// The text to classify
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for listing text columns
#[derive(Parser, Debug, Clone)]
pub struct ColumnsArgs {
    /// Path to the delimited input file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_analyze_command() {
        let args = SentiraArgs::try_parse_from([
            "sentira",
            "analyze",
            "posts.csv",
            "--text-column",
            "Comment",
            "--output",
            "results.csv",
        ])
        .unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.input, PathBuf::from("posts.csv"));
            assert_eq!(analyze_args.text_column.as_deref(), Some("Comment"));
            assert_eq!(analyze_args.output, Some(PathBuf::from("results.csv")));
            assert_eq!(analyze_args.delimiter, ',');
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_classify_command() {
        let args =
            SentiraArgs::try_parse_from(["sentira", "classify", "what a great day"]).unwrap();

        if let Command::Classify(classify_args) = args.command {
            assert_eq!(classify_args.text, "what a great day");
        } else {
            panic!("Expected Classify command");
        }
    }

    #[test]
    fn test_columns_command_with_delimiter() {
        let args = SentiraArgs::try_parse_from([
            "sentira",
            "columns",
            "posts.tsv",
            "--delimiter",
            "\t",
        ])
        .unwrap();

        if let Command::Columns(columns_args) = args.command {
            assert_eq!(columns_args.delimiter, '\t');
        } else {
            panic!("Expected Columns command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = SentiraArgs::try_parse_from(["sentira", "classify", "x"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = SentiraArgs::try_parse_from(["sentira", "-vv", "classify", "x"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            SentiraArgs::try_parse_from(["sentira", "--quiet", "classify", "x"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            SentiraArgs::try_parse_from(["sentira", "--format", "json", "classify", "x"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
