//! # Social Sentiment
//!
//! Multilingual sentiment pipeline for social-media text (tweets and
//! YouTube comments) in English, Hindi and Tamil.
//!
//! ## Modules
//!
//! - `data` - Source items, text normalization and item sources
//! - `sentiment` - Language detection, seed lexicons and classification
//! - `pipeline` - Record unification (raw items into normalized records)
//! - `report` - Aggregation, rendering and the audit log
//! - `utils` - Configuration loading
//!
//! ## Example Usage
//!
//! ```no_run
//! use social_sentiment::{Item, RecordUnifier, ReportAggregator, YouTubeItem};
//!
//! let items = vec![
//!     Item::tweet("I love this product!! https://x.co"),
//!     Item::YouTube(YouTubeItem::new("यह बहुत बुरा है").with_view_count(1000)),
//! ];
//!
//! let unifier = RecordUnifier::new();
//! let records = unifier.unify(&items);
//!
//! let report = ReportAggregator::default().aggregate(&records);
//! println!("{}", report);
//! ```

pub mod data;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod sentiment;
pub mod utils;

// Re-exports for convenience
pub use data::{
    load_items, Item, ItemCollector, ItemSource, JsonFileSource, Platform, SampleSource,
    TextNormalizer, TwitterItem, YouTubeItem,
};
pub use error::{Result, SentimentError};
pub use pipeline::{NormalizedRecord, RecordUnifier, TextAnalysis};
pub use report::{
    AuditLog, AuditRow, Example, ExampleRanking, PlatformSummary, Report, ReportAggregator,
    SentimentDistribution, TermCount, TopExamples,
};
pub use sentiment::{
    ClassificationGap, Detection, FallbackReason, Language, LanguageDetector, LexiconMatch,
    PolarityScorer, SeedLexicon, Sentiment, SentimentClassifier, Thresholds, VaderScorer, Verdict,
};
pub use utils::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod defaults {
    /// Compound score at or above which English text is Positive
    pub const POSITIVE_THRESHOLD: f64 = 0.05;

    /// Compound score at or below which English text is Negative
    pub const NEGATIVE_THRESHOLD: f64 = -0.05;

    /// Detector confidence below which the English fallback is used
    pub const MIN_DETECTION_CONFIDENCE: f64 = 0.0;

    /// Engagement contributed by a single tweet
    pub const TWITTER_ENGAGEMENT: u64 = 1;

    /// Maximum example texts reported per polarity
    pub const MAX_EXAMPLES: usize = 5;

    /// Example texts must be longer than this many characters
    pub const MIN_EXAMPLE_CHARS: usize = 5;

    /// Maximum frequent terms reported per polarity
    pub const MAX_TERMS: usize = 5;

    /// Default audit log location
    pub const AUDIT_LOG_PATH: &str = "sentiment_audit.csv";
}
