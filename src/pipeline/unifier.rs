//! # Record Unifier
//!
//! Runs every item through normalize → detect → classify and produces one
//! record shape regardless of the source platform.

use crate::data::{Item, Platform, TextNormalizer};
use crate::sentiment::{
    Detection, Language, LanguageDetector, Sentiment, SentimentClassifier, Thresholds, Verdict,
};
use crate::utils::Config;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Item after normalization, detection and classification
///
/// Created only by [`RecordUnifier`], read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRecord {
    text: String,
    cleaned_text: String,
    language: Language,
    sentiment: Sentiment,
    source: Platform,
    engagement: u64,
    origin_title: Option<String>,
}

impl NormalizedRecord {
    /// Original text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Normalized text
    pub fn cleaned_text(&self) -> &str {
        &self.cleaned_text
    }

    /// Detected language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Sentiment class
    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    /// Source platform
    pub fn source(&self) -> Platform {
        self.source
    }

    /// Engagement contributed to platform totals
    pub fn engagement(&self) -> u64 {
        self.engagement
    }

    /// Video title for YouTube records
    pub fn origin_title(&self) -> Option<&str> {
        self.origin_title.as_deref()
    }

    /// Short display label, e.g. `YouTube: Pixel 9 Review`
    pub fn label(&self) -> String {
        match &self.origin_title {
            Some(title) => format!("{}: {}", self.source, title),
            None => self.source.to_string(),
        }
    }
}

/// Single-text analysis with the intermediate outcomes
#[derive(Debug, Clone, Serialize)]
pub struct TextAnalysis {
    /// Input text
    pub text: String,
    /// Normalized text
    pub cleaned_text: String,
    /// Detection outcome
    pub detection: Detection,
    /// Classification outcome
    pub verdict: Verdict,
}

impl TextAnalysis {
    /// Language used for classification
    pub fn language(&self) -> Language {
        self.detection.language()
    }

    /// Sentiment class
    pub fn sentiment(&self) -> Sentiment {
        self.verdict.sentiment()
    }
}

/// Record unifier: the normalize → detect → classify chain
#[derive(Debug, Default)]
pub struct RecordUnifier {
    normalizer: TextNormalizer,
    detector: LanguageDetector,
    classifier: SentimentClassifier,
}

impl RecordUnifier {
    /// Create a unifier with default components
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a unifier from explicit components
    pub fn with_components(
        normalizer: TextNormalizer,
        detector: LanguageDetector,
        classifier: SentimentClassifier,
    ) -> Self {
        Self {
            normalizer,
            detector,
            classifier,
        }
    }

    /// Create a unifier honouring detection, classifier and lexicon settings
    pub fn from_config(config: &Config) -> Self {
        let detector =
            LanguageDetector::new().with_min_confidence(config.detection.min_confidence);

        let mut classifier = SentimentClassifier::new().with_thresholds(Thresholds {
            positive: config.classifier.positive_threshold,
            negative: config.classifier.negative_threshold,
        });
        if let Some(words) = &config.lexicons.hindi {
            classifier = classifier.with_lexicon(Language::Hindi, words.to_lexicon());
        }
        if let Some(words) = &config.lexicons.tamil {
            classifier = classifier.with_lexicon(Language::Tamil, words.to_lexicon());
        }

        Self::with_components(TextNormalizer::new(), detector, classifier)
    }

    /// Text normalizer in use
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Language detector in use
    pub fn detector(&self) -> &LanguageDetector {
        &self.detector
    }

    /// Sentiment classifier in use
    pub fn classifier(&self) -> &SentimentClassifier {
        &self.classifier
    }

    /// Analyze one free text
    pub fn analyze_text(&self, text: &str) -> TextAnalysis {
        let cleaned_text = self.normalizer.normalize(text);
        let detection = self.detector.detect(&cleaned_text);
        let verdict = self.classifier.evaluate(&cleaned_text, detection.language());

        TextAnalysis {
            text: text.to_string(),
            cleaned_text,
            detection,
            verdict,
        }
    }

    /// Unify one item
    pub fn unify_item(&self, item: &Item) -> NormalizedRecord {
        let cleaned_text = self.normalizer.normalize(item.raw_text());
        let language = self.detector.detect_language(&cleaned_text);
        let sentiment = self.classifier.classify(&cleaned_text, language);

        debug!(
            "{} item -> {} / {}: {:?}",
            item.platform(),
            language,
            sentiment,
            cleaned_text
        );

        NormalizedRecord {
            text: item.raw_text().to_string(),
            cleaned_text,
            language,
            sentiment,
            source: item.platform(),
            engagement: item.engagement(),
            origin_title: item.origin_title().map(String::from),
        }
    }

    /// Unify items, preserving input order
    pub fn unify(&self, items: &[Item]) -> Vec<NormalizedRecord> {
        let records: Vec<NormalizedRecord> = items.iter().map(|item| self.unify_item(item)).collect();

        let mut languages: BTreeMap<Language, usize> = BTreeMap::new();
        for record in &records {
            *languages.entry(record.language).or_insert(0) += 1;
        }
        info!("Unified {} items, languages: {:?}", records.len(), languages);

        records
    }
}

#[cfg(test)]
impl NormalizedRecord {
    /// English record with a fixed class, for aggregation tests
    pub(crate) fn fixture(text: &str, sentiment: Sentiment, source: Platform, engagement: u64) -> Self {
        Self {
            text: text.to_string(),
            cleaned_text: text.to_lowercase(),
            language: Language::English,
            sentiment,
            source,
            engagement,
            origin_title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::YouTubeItem;

    #[test]
    fn test_unify_tweet() {
        let unifier = RecordUnifier::new();
        let record = unifier.unify_item(&Item::tweet("I love this product!! https://x.co"));

        assert_eq!(record.text(), "I love this product!! https://x.co");
        assert_eq!(record.cleaned_text(), "i love this product");
        assert_eq!(record.language(), Language::English);
        assert_eq!(record.sentiment(), Sentiment::Positive);
        assert_eq!(record.source(), Platform::Twitter);
        assert_eq!(record.engagement(), 1);
        assert_eq!(record.label(), "Twitter");
    }

    #[test]
    fn test_unify_comment() {
        let unifier = RecordUnifier::new();
        let item: Item = YouTubeItem::new("यह बहुत बुरा है")
            .with_title("Review")
            .with_view_count(1000)
            .into();
        let record = unifier.unify_item(&item);

        assert_eq!(record.language(), Language::Hindi);
        assert_eq!(record.sentiment(), Sentiment::Negative);
        assert_eq!(record.source(), Platform::YouTube);
        assert_eq!(record.engagement(), 1000);
        assert_eq!(record.origin_title(), Some("Review"));
        assert_eq!(record.label(), "YouTube: Review");
    }

    #[test]
    fn test_missing_view_count_defaults_to_zero() {
        let unifier = RecordUnifier::new();
        let record = unifier.unify_item(&Item::comment("nice"));
        assert_eq!(record.engagement(), 0);
    }

    #[test]
    fn test_order_preserved() {
        let unifier = RecordUnifier::new();
        let items = vec![
            Item::tweet("first"),
            Item::comment("second"),
            Item::tweet("third"),
        ];
        let records = unifier.unify(&items);
        let texts: Vec<&str> = records.iter().map(|r| r.text()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(RecordUnifier::new().unify(&[]).is_empty());
    }

    #[test]
    fn test_cleaned_text_is_pure() {
        let unifier = RecordUnifier::new();
        let a = unifier.unify_item(&Item::tweet("Same TEXT!!"));
        let b = unifier.unify_item(&Item::comment("Same TEXT!!"));
        assert_eq!(a.cleaned_text(), b.cleaned_text());
        assert_eq!(a.language(), b.language());
        assert_eq!(a.sentiment(), b.sentiment());
    }

    #[test]
    fn test_analyze_text() {
        let unifier = RecordUnifier::new();
        let analysis = unifier.analyze_text("ठीक है");

        assert_eq!(analysis.cleaned_text, "ठीक है");
        assert_eq!(analysis.sentiment(), Sentiment::Neutral);

        let analysis = unifier.analyze_text("");
        assert!(analysis.detection.is_fallback());
        assert_eq!(analysis.language(), Language::English);
        assert_eq!(analysis.sentiment(), Sentiment::Neutral);
    }

    #[test]
    fn test_from_config_components() {
        let mut config = Config::default();
        config.detection.min_confidence = 0.3;
        config.classifier.positive_threshold = 0.4;
        let unifier = RecordUnifier::from_config(&config);

        assert_eq!(unifier.detector().min_confidence(), 0.3);
        assert_eq!(unifier.classifier().thresholds().positive, 0.4);
        assert_eq!(unifier.normalizer().normalize("Hello @you!!"), "hello");
    }

    #[test]
    fn test_from_config_lexicon_override() {
        let config: Config = toml::from_str(
            r#"
            [lexicons.tamil]
            positive = ["சூப்பர்"]
            negative = ["மோசம்"]
            "#,
        )
        .unwrap();
        let unifier = RecordUnifier::from_config(&config);

        let lexicon = unifier.classifier().lexicon(Language::Tamil).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(unifier.classifier().lexicon(Language::Hindi), Some(&crate::SeedLexicon::hindi()));
    }
}
