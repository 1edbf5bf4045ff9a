//! The lexicon/rule-based sentiment classifier.
//!
//! [`SentimentAnalyzer`] maps free text to a [`SentimentScore`]: a label in
//! {Positive, Negative, Neutral} plus the raw compound polarity in
//! [-1.0, 1.0]. Scoring is deterministic and pure: per-token valences from
//! the lexicon, adjusted by booster/dampener words, negations, ALL-CAPS
//! emphasis, a contrastive "but" clause, and trailing punctuation, then
//! normalized into the compound range.
//!
//! # Examples
//!
//! ```
//! use sentira::sentiment::analyzer::SentimentAnalyzer;
//! use sentira::sentiment::label::SentimentLabel;
//!
//! let analyzer = SentimentAnalyzer::with_default_lexicon();
//! let score = analyzer.classify("This policy is absolutely wonderful and helpful");
//!
//! assert_eq!(score.label, SentimentLabel::Positive);
//! assert!(score.compound > 0.05);
//! ```

use std::sync::Arc;

use serde::Serialize;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::sentiment::label::SentimentLabel;
use crate::sentiment::lexicon::{Lexicon, default_lexicon};

/// Trimmed text shorter than this many characters is unreliable signal and
/// classifies as Neutral with zero confidence.
const MIN_TEXT_CHARS: usize = 5;

/// Compound score at or above this threshold labels as Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound score at or below this threshold labels as Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Normalization constant: compound = sum / sqrt(sum^2 + alpha).
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Valence adjustment contributed by a booster or dampener word.
const BOOSTER_INCREMENT: f64 = 0.293;

/// Multiplier applied to a valence in the scope of a negation.
const NEGATION_FACTOR: f64 = -0.74;

/// Valence adjustment for an ALL-CAPS word in otherwise mixed-case text.
const CAPS_INCREMENT: f64 = 0.733;

/// How many preceding tokens a booster or negation can reach.
const MODIFIER_WINDOW: usize = 3;

/// Decay of a modifier's effect with distance from the scored word.
const SCALAR_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

/// Words that amplify the valence of a following sentiment word.
const BOOSTERS: &[&str] = &[
    "absolutely",
    "amazingly",
    "awfully",
    "completely",
    "considerably",
    "decidedly",
    "deeply",
    "enormously",
    "entirely",
    "especially",
    "exceptionally",
    "extremely",
    "greatly",
    "highly",
    "hugely",
    "incredibly",
    "intensely",
    "particularly",
    "purely",
    "quite",
    "really",
    "remarkably",
    "so",
    "substantially",
    "thoroughly",
    "totally",
    "tremendously",
    "unbelievably",
    "unusually",
    "utterly",
    "very",
];

/// Words that dampen the valence of a following sentiment word.
const DAMPENERS: &[&str] = &[
    "almost",
    "barely",
    "hardly",
    "kinda",
    "less",
    "little",
    "marginally",
    "occasionally",
    "partly",
    "scarcely",
    "slightly",
    "somewhat",
    "sorta",
];

/// Negation words, matched with apostrophes stripped ("don't" -> "dont").
const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont",
    "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither",
    "never", "no", "nobody", "none", "nope", "nor", "not", "nothing",
    "nowhere", "rarely", "seldom", "shouldnt", "wasnt", "werent", "without",
    "wont", "wouldnt",
];

/// The result of classifying one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScore {
    /// The assigned sentiment class.
    pub label: SentimentLabel,
    /// The raw compound polarity in [-1.0, 1.0], not snapped to a
    /// label boundary, usable as a confidence display.
    pub compound: f64,
}

impl SentimentScore {
    /// The score assigned to short or empty text.
    pub fn neutral() -> Self {
        SentimentScore {
            label: SentimentLabel::Neutral,
            compound: 0.0,
        }
    }
}

/// A lexicon/rule-based sentiment classifier.
///
/// Construct one instance with its lexicon loaded, then call
/// [`classify`](SentimentAnalyzer::classify) repeatedly; there is no
/// per-call initialization and no hidden state.
pub struct SentimentAnalyzer {
    lexicon: Arc<Lexicon>,
    tokenizer: WordTokenizer,
}

impl SentimentAnalyzer {
    /// Create an analyzer over the given lexicon.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        SentimentAnalyzer {
            lexicon,
            tokenizer: WordTokenizer::new(),
        }
    }

    /// Create an analyzer over the process-wide built-in lexicon.
    pub fn with_default_lexicon() -> Self {
        SentimentAnalyzer::new(default_lexicon())
    }

    /// The lexicon backing this analyzer.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Classify a piece of text.
    ///
    /// Total over any string input: the text is trimmed, text shorter than
    /// five characters returns `(Neutral, 0.0)` unconditionally, and all
    /// other inputs produce a compound score in [-1.0, 1.0] with the label
    /// derived from the fixed thresholds.
    pub fn classify(&self, text: &str) -> SentimentScore {
        let trimmed = text.trim();
        if trimmed.chars().count() < MIN_TEXT_CHARS {
            return SentimentScore::neutral();
        }

        let tokens: Vec<Token> = match self.tokenizer.tokenize(trimmed) {
            Ok(stream) => stream.collect(),
            Err(_) => return SentimentScore::neutral(),
        };

        let mut valences = self.token_valences(&tokens);
        apply_but_reweighting(&tokens, &mut valences);

        let mut sum: f64 = valences.iter().sum();
        if sum > 0.0 {
            sum += punctuation_emphasis(trimmed);
        } else if sum < 0.0 {
            sum -= punctuation_emphasis(trimmed);
        }

        let compound = normalize(sum);
        SentimentScore {
            label: label_for(compound),
            compound,
        }
    }

    /// Compute the adjusted valence of every token.
    fn token_valences(&self, tokens: &[Token]) -> Vec<f64> {
        let mixed_case = has_mixed_case(tokens);
        let mut valences = vec![0.0; tokens.len()];

        for (i, token) in tokens.iter().enumerate() {
            let word = token.lowercase();
            let Some(base) = self.lexicon.get(&word) else {
                continue;
            };

            let mut valence = base;
            if mixed_case && token.is_all_caps() {
                valence += CAPS_INCREMENT * base.signum();
            }

            // Boosters and negations act over a window of preceding tokens,
            // with effect decaying by distance. Words that carry their own
            // valence never double as modifiers.
            for distance in 0..MODIFIER_WINDOW {
                if i <= distance {
                    break;
                }
                let prev_word = tokens[i - distance - 1].lowercase();
                if self.lexicon.contains(&prev_word) {
                    continue;
                }

                let scalar = modifier_scalar(&prev_word, base);
                if scalar != 0.0 {
                    valence += scalar * SCALAR_DECAY[distance];
                }
                if is_negation(&prev_word) {
                    valence *= NEGATION_FACTOR;
                }
            }

            valences[i] = valence;
        }

        valences
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        SentimentAnalyzer::with_default_lexicon()
    }
}

impl std::fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentAnalyzer")
            .field("lexicon_entries", &self.lexicon.len())
            .finish()
    }
}

/// Map a compound score to its label under the fixed thresholds.
pub fn label_for(compound: f64) -> SentimentLabel {
    if compound >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Booster/dampener contribution of a word toward a valence of sign `base`.
fn modifier_scalar(word: &str, base: f64) -> f64 {
    if BOOSTERS.contains(&word) {
        BOOSTER_INCREMENT * base.signum()
    } else if DAMPENERS.contains(&word) {
        -BOOSTER_INCREMENT * base.signum()
    } else {
        0.0
    }
}

fn is_negation(word: &str) -> bool {
    let stripped: String = word.chars().filter(|c| *c != '\'' && *c != '’').collect();
    NEGATIONS.contains(&stripped.as_str()) || word.ends_with("n't")
}

/// True when some but not all tokens are ALL-CAPS, which marks the
/// capitalized ones as deliberate emphasis.
fn has_mixed_case(tokens: &[Token]) -> bool {
    let caps = tokens.iter().filter(|t| t.is_all_caps()).count();
    caps > 0 && caps < tokens.len()
}

/// Reweight valences around the first contrastive "but": the clause after
/// it dominates the sentence's overall sentiment.
fn apply_but_reweighting(tokens: &[Token], valences: &mut [f64]) {
    let Some(but_index) = tokens.iter().position(|t| t.lowercase() == "but") else {
        return;
    };
    for (i, valence) in valences.iter_mut().enumerate() {
        if i < but_index {
            *valence *= 0.5;
        } else if i > but_index {
            *valence *= 1.5;
        }
    }
}

/// Emphasis contributed by trailing exclamation and question marks.
fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64;
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    exclamations * 0.292 + question_emphasis
}

/// Normalize a raw valence sum into the closed compound range [-1.0, 1.0].
fn normalize(sum: f64) -> f64 {
    let compound = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    compound.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::with_default_lexicon()
    }

    fn assert_consistent(score: SentimentScore) {
        assert!(score.compound >= -1.0 && score.compound <= 1.0);
        assert_eq!(score.label, label_for(score.compound));
    }

    #[test]
    fn test_short_text_is_neutral() {
        let analyzer = analyzer();
        for text in ["", "ok", "bad", "  hi  ", "\t\n", "good"] {
            let score = analyzer.classify(text);
            assert_eq!(score.label, SentimentLabel::Neutral, "text: {text:?}");
            assert_eq!(score.compound, 0.0, "text: {text:?}");
        }
    }

    #[test]
    fn test_positive_example() {
        let score = analyzer().classify("This policy is absolutely wonderful and helpful");
        assert_eq!(score.label, SentimentLabel::Positive);
        assert!(score.compound > 0.05);
        assert_consistent(score);
    }

    #[test]
    fn test_negative_example() {
        let score = analyzer().classify("This is a disaster and terrible failure");
        assert_eq!(score.label, SentimentLabel::Negative);
        assert!(score.compound < -0.05);
        assert_consistent(score);
    }

    #[test]
    fn test_neutral_text() {
        let score = analyzer().classify("The meeting is scheduled for Tuesday afternoon");
        assert_eq!(score.label, SentimentLabel::Neutral);
        assert_consistent(score);
    }

    #[test]
    fn test_determinism() {
        let analyzer = analyzer();
        let text = "An absolutely wonderful outcome, but the rollout was a mess!";
        let first = analyzer.classify(text);
        for _ in 0..10 {
            assert_eq!(analyzer.classify(text), first);
        }
    }

    #[test]
    fn test_compound_in_range_and_label_consistent() {
        let analyzer = analyzer();
        let texts = [
            "wonderful wonderful wonderful wonderful wonderful wonderful",
            "disaster disaster disaster disaster disaster disaster disaster",
            "not good at all",
            "ABSOLUTELY TERRIBLE!!!!",
            "plain words without any charge whatsoever",
            "great but terrible",
            "really really really really happy!!!",
        ];
        for text in texts {
            assert_consistent(analyzer.classify(text));
        }
    }

    #[test]
    fn test_negation_flips_polarity() {
        let analyzer = analyzer();
        let plain = analyzer.classify("the plan is good");
        let negated = analyzer.classify("the plan is not good");
        assert_eq!(plain.label, SentimentLabel::Positive);
        assert_eq!(negated.label, SentimentLabel::Negative);

        let contraction = analyzer.classify("the plan isn't good");
        assert_eq!(contraction.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_booster_amplifies() {
        let analyzer = analyzer();
        let plain = analyzer.classify("a good proposal");
        let boosted = analyzer.classify("a very good proposal");
        assert!(boosted.compound > plain.compound);

        let dampened = analyzer.classify("a slightly good proposal");
        assert!(dampened.compound < plain.compound);
    }

    #[test]
    fn test_caps_emphasis() {
        let analyzer = analyzer();
        let plain = analyzer.classify("this is great news");
        let shouted = analyzer.classify("this is GREAT news");
        assert!(shouted.compound > plain.compound);

        // All-caps text has no case contrast, so no emphasis applies.
        let uniform = analyzer.classify("THIS IS GREAT NEWS");
        assert!((uniform.compound - plain.compound).abs() < 1e-9);
    }

    #[test]
    fn test_exclamation_emphasis() {
        let analyzer = analyzer();
        let plain = analyzer.classify("the results are great");
        let excited = analyzer.classify("the results are great!!!");
        assert!(excited.compound > plain.compound);

        // Emphasis never applies to a zero-valence text.
        let neutral = analyzer.classify("the results are here!!!");
        assert_eq!(neutral.compound, 0.0);
    }

    #[test]
    fn test_but_clause_dominates() {
        let analyzer = analyzer();
        let score = analyzer.classify("the idea is great but the execution is terrible");
        assert_eq!(score.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::from_tsv("frobnicate\t3.0\n").unwrap();
        let analyzer = SentimentAnalyzer::new(Arc::new(lexicon));
        let score = analyzer.classify("please frobnicate this");
        assert_eq!(score.label, SentimentLabel::Positive);
    }
}
