//! Valence lexicon loading and the process-wide default lexicon.
//!
//! A [`Lexicon`] maps lowercase tokens to valence weights. The crate ships
//! a built-in English lexicon embedded at compile time; loading it happens
//! once per process behind [`default_lexicon`], which is idempotent and
//! safe to call from anywhere, any number of times.
//!
//! # Examples
//!
//! ```
//! use sentira::sentiment::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::from_tsv("good\t1.9\nbad\t-2.5\n").unwrap();
//! assert_eq!(lexicon.get("good"), Some(1.9));
//! assert_eq!(lexicon.get("unknown"), None);
//! ```

use std::sync::Arc;

use ahash::AHashMap;
use lazy_static::lazy_static;
use log::debug;

use crate::error::{Result, SentiraError};

/// The built-in valence lexicon, embedded at compile time.
const BUILTIN_LEXICON_TSV: &str = include_str!("lexicon.tsv");

lazy_static! {
    static ref DEFAULT_LEXICON: Arc<Lexicon> = {
        let lexicon = Lexicon::from_tsv(BUILTIN_LEXICON_TSV)
            .expect("built-in lexicon resource is well-formed");
        debug!("loaded built-in lexicon with {} entries", lexicon.len());
        Arc::new(lexicon)
    };
}

/// Return the process-wide default lexicon.
///
/// The first call parses the embedded resource; subsequent calls return
/// the same shared instance.
pub fn default_lexicon() -> Arc<Lexicon> {
    Arc::clone(&DEFAULT_LEXICON)
}

/// A token-to-valence map used by the sentiment scorer.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: AHashMap<String, f64>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Lexicon {
            entries: AHashMap::new(),
        }
    }

    /// Parse a lexicon from tab-separated text.
    ///
    /// Each line holds `token<TAB>valence`. Blank lines and lines starting
    /// with `#` are ignored. Tokens are lowercased; a duplicate token keeps
    /// the last entry.
    pub fn from_tsv(input: &str) -> Result<Self> {
        let mut entries = AHashMap::new();

        for (line_no, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (token, valence) = line.split_once('\t').ok_or_else(|| {
                SentiraError::parse(format!(
                    "lexicon line {}: expected 'token<TAB>valence'",
                    line_no + 1
                ))
            })?;

            let valence: f64 = valence.trim().parse().map_err(|_| {
                SentiraError::parse(format!(
                    "lexicon line {}: invalid valence '{}'",
                    line_no + 1,
                    valence
                ))
            })?;

            entries.insert(token.trim().to_lowercase(), valence);
        }

        Ok(Lexicon { entries })
    }

    /// Add or replace a single entry.
    pub fn insert<S: Into<String>>(&mut self, token: S, valence: f64) {
        self.entries.insert(token.into().to_lowercase(), valence);
    }

    /// Look up the valence for a lowercase token.
    pub fn get(&self, token: &str) -> Option<f64> {
        self.entries.get(token).copied()
    }

    /// Whether the lexicon contains the given lowercase token.
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
