//! Token types for text analysis.
//!
//! A [`Token`] is a single word produced by a tokenizer, carrying its
//! position in the token stream and its byte offsets in the original text.
//! Case is preserved so the sentiment scorer can detect ALL-CAPS emphasis.
//!
//! # Examples
//!
//! ```
//! use sentira::analysis::token::Token;
//!
//! let token = Token::with_offsets("GREAT", 0, 0, 5);
//! assert_eq!(token.text, "GREAT");
//! assert!(token.is_all_caps());
//! ```

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token's text content, case preserved.
    pub text: String,
    /// Position in the token stream (0-based).
    pub position: usize,
    /// Byte offset of the token's start in the original text.
    pub start_offset: usize,
    /// Byte offset of the token's end in the original text.
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end = text.len();
        Token {
            text,
            position,
            start_offset: 0,
            end_offset: end,
        }
    }

    /// Create a new token with explicit byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// The token's text lowercased, for lexicon lookup.
    pub fn lowercase(&self) -> String {
        self.text.to_lowercase()
    }

    /// Whether every alphabetic character in the token is uppercase.
    ///
    /// Single-character tokens never count as shouting ("I", "A").
    pub fn is_all_caps(&self) -> bool {
        let mut has_alpha = false;
        for c in self.text.chars() {
            if c.is_alphabetic() {
                has_alpha = true;
                if !c.is_uppercase() {
                    return false;
                }
            }
        }
        has_alpha && self.text.chars().count() > 1
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Type alias for a boxed iterator of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
