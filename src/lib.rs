//! # Sentira
//!
//! A lexicon-based sentiment analysis toolkit for tabular text data.
//!
//! ## Features
//!
//! - Pure Rust, deterministic lexicon/rule-based classifier
//! - Compound polarity scores in [-1.0, 1.0] with threshold labeling
//! - Schema-less records with typed field values and CSV round-tripping
//! - Text-column sniffing for arbitrary delimited inputs
//! - Batch aggregation into a per-label distribution summary
//!
//! ## Example
//!
//! ```
//! use sentira::sentiment::SentimentAnalyzer;
//! use sentira::sentiment::SentimentLabel;
//!
//! let analyzer = SentimentAnalyzer::with_default_lexicon();
//! let score = analyzer.classify("This is a disaster and terrible failure");
//!
//! assert_eq!(score.label, SentimentLabel::Negative);
//! assert!(score.compound < -0.05);
//! ```

pub mod aggregate;
pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod sentiment;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
