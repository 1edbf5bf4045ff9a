//! Text analysis for the sentiment scorer.
//!
//! The scorer only needs word-level tokens with their positions preserved,
//! so this module stays small: a [`token::Token`] type and a
//! [`tokenizer::Tokenizer`] trait with one Unicode word-boundary
//! implementation. There is no filtering, stemming, or language handling.

pub mod token;
pub mod tokenizer;

pub use token::{Token, TokenStream};
pub use tokenizer::{Tokenizer, WordTokenizer};
