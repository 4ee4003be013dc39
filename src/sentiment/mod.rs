//! # Sentiment Module
//!
//! Language detection, seed lexicons and per-language sentiment classification.

mod classifier;
mod language;
mod lexicon;
mod scorer;

pub use classifier::{ClassificationGap, Sentiment, SentimentClassifier, Thresholds, Verdict};
pub use language::{Detection, FallbackReason, Language, LanguageDetector};
pub use lexicon::{LexiconMatch, SeedLexicon};
pub use scorer::{PolarityScorer, VaderScorer};
