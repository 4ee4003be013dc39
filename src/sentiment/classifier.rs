//! # Sentiment Classifier
//!
//! Per-language sentiment classification: a compound polarity score for
//! English, seed lexicons for Hindi and Tamil.

use super::language::Language;
use super::lexicon::SeedLexicon;
use super::scorer::{PolarityScorer, VaderScorer};
use crate::defaults;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Sentiment class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// All classes, in report order
    pub fn all() -> [Sentiment; 3] {
        [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    /// Classify a compound score against decision thresholds
    pub fn from_compound(score: f64, thresholds: &Thresholds) -> Self {
        if score >= thresholds.positive {
            Sentiment::Positive
        } else if score <= thresholds.negative {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision thresholds on the compound score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Scores at or above are Positive
    pub positive: f64,
    /// Scores at or below are Negative
    pub negative: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive: defaults::POSITIVE_THRESHOLD,
            negative: defaults::NEGATIVE_THRESHOLD,
        }
    }
}

/// Why a text ended up Neutral
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ClassificationGap {
    /// Compound score fell between the thresholds
    NeutralBand { compound: f64 },
    /// No seed word occurs in the text
    NoLexiconMatch { language: Language },
    /// No lexicon is configured for the language
    NoLexicon { language: Language },
}

/// Full classification outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Verdict {
    /// Compound score crossed a threshold
    Scored { compound: f64, sentiment: Sentiment },
    /// A seed word decided the class
    Matched { word: String, sentiment: Sentiment },
    /// Defined Neutral outcome
    Gap(ClassificationGap),
}

impl Verdict {
    /// Resulting sentiment class
    pub fn sentiment(&self) -> Sentiment {
        match self {
            Verdict::Scored { sentiment, .. } | Verdict::Matched { sentiment, .. } => *sentiment,
            Verdict::Gap(_) => Sentiment::Neutral,
        }
    }
}

/// Sentiment classifier with injected scorer and lexicons
///
/// Everything is fixed at construction, so classification is a pure
/// function of `(text, language)`.
pub struct SentimentClassifier {
    /// English compound scorer
    scorer: Box<dyn PolarityScorer>,
    /// Seed lexicons for non-English languages
    lexicons: HashMap<Language, SeedLexicon>,
    /// Decision thresholds for the compound score
    thresholds: Thresholds,
}

impl fmt::Debug for SentimentClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentClassifier")
            .field("scorer", &self.scorer.name())
            .field("lexicons", &self.lexicons)
            .field("thresholds", &self.thresholds)
            .finish()
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier {
    /// Create a classifier with VADER and the built-in Hindi and Tamil lexicons
    pub fn new() -> Self {
        let mut lexicons = HashMap::new();
        lexicons.insert(Language::Hindi, SeedLexicon::hindi());
        lexicons.insert(Language::Tamil, SeedLexicon::tamil());

        Self {
            scorer: Box::new(VaderScorer::new()),
            lexicons,
            thresholds: Thresholds::default(),
        }
    }

    /// Create a classifier with a custom scorer and no lexicons
    pub fn with_scorer(scorer: Box<dyn PolarityScorer>) -> Self {
        Self {
            scorer,
            lexicons: HashMap::new(),
            thresholds: Thresholds::default(),
        }
    }

    /// Set or replace the lexicon for a language
    pub fn with_lexicon(mut self, language: Language, lexicon: SeedLexicon) -> Self {
        self.lexicons.insert(language, lexicon);
        self
    }

    /// Remove the lexicon for a language
    pub fn without_lexicon(mut self, language: Language) -> Self {
        self.lexicons.remove(&language);
        self
    }

    /// Set decision thresholds
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Decision thresholds in use
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Lexicon configured for a language
    pub fn lexicon(&self, language: Language) -> Option<&SeedLexicon> {
        self.lexicons.get(&language)
    }

    /// Classify normalized text, keeping the reason for the outcome
    pub fn evaluate(&self, cleaned: &str, language: Language) -> Verdict {
        match language {
            Language::English => {
                let compound = self.scorer.compound(cleaned);
                match Sentiment::from_compound(compound, &self.thresholds) {
                    Sentiment::Neutral => Verdict::Gap(ClassificationGap::NeutralBand { compound }),
                    sentiment => Verdict::Scored {
                        compound,
                        sentiment,
                    },
                }
            }
            Language::Hindi | Language::Tamil => {
                let lexicon = match self.lexicons.get(&language) {
                    Some(lexicon) => lexicon,
                    None => return Verdict::Gap(ClassificationGap::NoLexicon { language }),
                };
                match lexicon.first_match(cleaned) {
                    Some(m) => Verdict::Matched {
                        word: m.word,
                        sentiment: m.sentiment,
                    },
                    None => Verdict::Gap(ClassificationGap::NoLexiconMatch { language }),
                }
            }
        }
    }

    /// Classify normalized text
    pub fn classify(&self, cleaned: &str, language: Language) -> Sentiment {
        self.evaluate(cleaned, language).sentiment()
    }
}
