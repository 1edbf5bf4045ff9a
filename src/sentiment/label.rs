//! Sentiment labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SentiraError;

/// The sentiment class assigned to a piece of text.
///
/// `Error` is a reserved label: the classifier never produces it, but data
/// re-imported from an export may carry it, and the aggregator filters such
/// rows out defensively.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum SentimentLabel {
    /// Compound score at or above the positive threshold.
    Positive,
    /// Compound score at or below the negative threshold.
    Negative,
    /// Everything between the thresholds, and all short or empty text.
    Neutral,
    /// Reserved label for rows that failed classification upstream.
    Error,
}

impl SentimentLabel {
    /// String form, as written to exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Error => "Error",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = SentiraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positive" => Ok(SentimentLabel::Positive),
            "Negative" => Ok(SentimentLabel::Negative),
            "Neutral" => Ok(SentimentLabel::Neutral),
            "Error" => Ok(SentimentLabel::Error),
            other => Err(SentiraError::parse(format!(
                "unknown sentiment label: '{other}'"
            ))),
        }
    }
}
