//! Tokenizers that split text into word tokens.
//!
//! The only implementation is [`WordTokenizer`], which splits on Unicode
//! word boundaries (UAX #29) and drops punctuation and whitespace segments.
//! Case is not touched; the sentiment scorer handles casing itself.
//!
//! # Examples
//!
//! ```
//! use sentira::analysis::tokenizer::{Tokenizer, WordTokenizer};
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, World!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, "World");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Trait for tokenizers that convert text into a token stream.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer.
    fn name(&self) -> &'static str;
}

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Word-internal apostrophes are kept ("don't" stays one token), so
/// negation contractions survive tokenization intact.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .unicode_word_indices()
            .enumerate()
            .map(|(position, (offset, word))| {
                Token::with_offsets(word, position, offset, offset + word.len())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &WordTokenizer, input: &str) -> Vec<String> {
        tokenizer
            .tokenize(input)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(
            texts(&tokenizer, "This policy is wonderful"),
            vec!["This", "policy", "is", "wonderful"]
        );
    }

    #[test]
    fn test_punctuation_dropped() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(
            texts(&tokenizer, "Terrible!!! A disaster, truly."),
            vec!["Terrible", "A", "disaster", "truly"]
        );
    }

    #[test]
    fn test_contractions_kept_whole() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(texts(&tokenizer, "don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn test_positions_and_offsets() {
        let tokenizer = WordTokenizer::new();
        let tokens: Vec<_> = tokenizer.tokenize("ok, fine").unwrap().collect();
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 4);
        assert_eq!(tokens[1].end_offset, 8);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = WordTokenizer::new();
        assert!(texts(&tokenizer, "").is_empty());
        assert!(texts(&tokenizer, "  \t\n").is_empty());
    }
}
