//! Sentiment classification.
//!
//! The classifier is a lexicon/rule-based scorer: each known word
//! contributes a valence weight, surrounding rule words (boosters,
//! negations) adjust it, and the document's summed valence is normalized
//! into a compound polarity in [-1.0, 1.0]. The compound maps to a label
//! through fixed thresholds.
//!
//! # Core Components
//!
//! - [`analyzer::SentimentAnalyzer`] - the classifier service; construct
//!   once, call [`classify`](analyzer::SentimentAnalyzer::classify)
//!   repeatedly
//! - [`lexicon::Lexicon`] - token-to-valence map, with a built-in resource
//!   loaded once per process
//! - [`label::SentimentLabel`] - Positive / Negative / Neutral, plus the
//!   reserved Error label

pub mod analyzer;
pub mod label;
pub mod lexicon;

pub use analyzer::{SentimentAnalyzer, SentimentScore};
pub use label::SentimentLabel;
pub use lexicon::{Lexicon, default_lexicon};
