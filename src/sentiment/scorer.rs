//! # Polarity Scoring
//!
//! Compound polarity scores for English text.

use std::fmt;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Trait for models producing a compound polarity score
pub trait PolarityScorer: Send + Sync {
    /// Compound score in [-1, 1]
    fn compound(&self, text: &str) -> f64;

    /// Model name used in logs
    fn name(&self) -> &str;
}

/// VADER lexicon and rule based scorer
///
/// Handles negation, intensifiers ("very", "extremely"), capitalization
/// and contrastive "but" the way the reference VADER implementation does.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl fmt::Debug for VaderScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaderScorer").finish_non_exhaustive()
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl VaderScorer {
    /// Create a scorer over the bundled VADER lexicon
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl PolarityScorer for VaderScorer {
    fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let scores = self.analyzer.polarity_scores(text);
        scores
            .get("compound")
            .copied()
            .unwrap_or(0.0)
            .clamp(-1.0, 1.0)
    }

    fn name(&self) -> &str {
        "vader"
    }
}
