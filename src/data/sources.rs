//! # Item Sources
//!
//! Collaborators that hand raw items to the pipeline. Fetching is best
//! effort: a failing source is logged and contributes nothing.

use super::items::{Item, Platform, YouTubeItem};
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Trait for item sources
pub trait ItemSource: Send + Sync + std::fmt::Debug {
    /// Source name used in logs
    fn name(&self) -> &str;

    /// Fetch up to `limit` items about `query`
    fn fetch(&self, query: &str, limit: usize) -> Result<Vec<Item>>;
}

/// Load a JSON array of items from disk
pub fn load_items(path: impl AsRef<Path>) -> Result<Vec<Item>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let items: Vec<Item> = serde_json::from_str(&content)?;
    debug!("Loaded {} items from {}", items.len(), path.as_ref().display());
    Ok(items)
}

/// Items previously exported to a JSON file
///
/// The query is ignored: the file is assumed to hold the results of one search.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ItemSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    fn fetch(&self, _query: &str, limit: usize) -> Result<Vec<Item>> {
        let mut items = load_items(&self.path)?;
        items.truncate(limit);
        Ok(items)
    }
}

/// Built-in sample feed for demonstrations and tests
///
/// Produces a fixed multilingual set of tweets or YouTube comments with the
/// query substituted into the text.
#[derive(Debug, Clone)]
pub struct SampleSource {
    platform: Platform,
}

impl SampleSource {
    /// Sample tweets
    pub fn twitter() -> Self {
        Self {
            platform: Platform::Twitter,
        }
    }

    /// Sample YouTube comments
    pub fn youtube() -> Self {
        Self {
            platform: Platform::YouTube,
        }
    }

    fn tweets(query: &str) -> Vec<Item> {
        vec![
            Item::tweet(format!("I love the new {}!! Best purchase this year https://t.co/x1", query)),
            Item::tweet(format!("@support my {} keeps crashing, terrible experience #fail", query)),
            Item::tweet(format!("Just got the {} today", query)),
            Item::tweet(format!("{} का कैमरा बहुत अच्छा है", query)),
            Item::tweet(format!("{} की बैटरी बुरा है, गुस्सा आ रहा है", query)),
            Item::tweet(format!("{} அருமை, மிகவும் சந்தோஷம்", query)),
            Item::tweet(format!("Honestly the {} is great value 😍", query)),
            Item::tweet(format!("Worst customer service ever for {}. Never again.", query)),
        ]
    }

    fn comments(query: &str) -> Vec<Item> {
        let review = format!("{} Review: One Month Later", query);
        let unboxing = format!("{} Unboxing", query);

        vec![
            YouTubeItem::new(format!("Amazing review, the {} looks awesome", query))
                .with_video_id("rv001")
                .with_title(review.clone())
                .with_view_count(125_000)
                .into(),
            YouTubeItem::new("This phone is overpriced and the battery is awful")
                .with_video_id("rv001")
                .with_title(review.clone())
                .with_view_count(125_000)
                .into(),
            YouTubeItem::new("ஃபோன் கெட்ட தரம், கோபம் வருது")
                .with_video_id("rv001")
                .with_title(review)
                .with_view_count(125_000)
                .into(),
            YouTubeItem::new("Who is watching in 2024?")
                .with_video_id("ub002")
                .with_title(unboxing.clone())
                .with_view_count(48_000)
                .into(),
            YouTubeItem::new("मुझे यह फ़ोन पसंद है")
                .with_video_id("ub002")
                .with_title(unboxing.clone())
                .with_view_count(48_000)
                .into(),
            YouTubeItem::new("Nice unboxing, thanks for sharing!")
                .with_video_id("ub002")
                .with_title(unboxing)
                .with_view_count(48_000)
                .into(),
        ]
    }
}

impl ItemSource for SampleSource {
    fn name(&self) -> &str {
        match self.platform {
            Platform::Twitter => "sample-twitter",
            Platform::YouTube => "sample-youtube",
        }
    }

    fn fetch(&self, query: &str, limit: usize) -> Result<Vec<Item>> {
        let mut items = match self.platform {
            Platform::Twitter => Self::tweets(query),
            Platform::YouTube => Self::comments(query),
        };
        items.truncate(limit);
        Ok(items)
    }
}

/// Collects items from several sources in a fixed order
#[derive(Debug)]
pub struct ItemCollector {
    sources: Vec<Box<dyn ItemSource>>,
    limit_per_source: usize,
}

impl Default for ItemCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemCollector {
    /// Create a collector without sources
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            limit_per_source: 200,
        }
    }

    /// Collector over the built-in samples: tweets first, then YouTube comments
    pub fn with_samples() -> Self {
        let mut collector = Self::new();
        collector.add_source(Box::new(SampleSource::twitter()));
        collector.add_source(Box::new(SampleSource::youtube()));
        collector
    }

    /// Set the per-source item limit
    pub fn with_limit(mut self, limit_per_source: usize) -> Self {
        self.limit_per_source = limit_per_source;
        self
    }

    /// Add an item source
    pub fn add_source(&mut self, source: Box<dyn ItemSource>) {
        self.sources.push(source);
    }

    /// Number of registered sources
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Collect items from every source, in registration order
    ///
    /// Never fails: a source error is logged and that source contributes no items.
    pub fn collect(&self, query: &str) -> Vec<Item> {
        let mut all_items = Vec::new();

        for source in &self.sources {
            match source.fetch(query, self.limit_per_source) {
                Ok(items) => {
                    debug!("Source {} returned {} items", source.name(), items.len());
                    all_items.extend(items);
                }
                Err(e) => {
                    warn!("Failed to fetch from source {}: {}", source.name(), e);
                }
            }
        }

        info!(
            "Collected {} items for query {:?} from {} sources",
            all_items.len(),
            query,
            self.sources.len()
        );
        all_items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SentimentError;
    use std::io::Write;

    #[derive(Debug)]
    struct FailingSource;

    impl ItemSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        fn fetch(&self, _query: &str, _limit: usize) -> Result<Vec<Item>> {
            Err(SentimentError::InvalidConfig("no credentials".to_string()))
        }
    }

    #[test]
    fn test_sample_sources() {
        let tweets = SampleSource::twitter().fetch("Pixel 9", 100).unwrap();
        assert!(!tweets.is_empty());
        assert!(tweets.iter().all(|i| i.platform() == Platform::Twitter));
        assert!(tweets[0].raw_text().contains("Pixel 9"));

        let comments = SampleSource::youtube().fetch("Pixel 9", 100).unwrap();
        assert!(comments.iter().all(|i| i.platform() == Platform::YouTube));
        assert!(comments.iter().all(|i| i.engagement() > 0));
    }

    #[test]
    fn test_limit_per_source() {
        let collector = ItemCollector::with_samples().with_limit(2);
        let items = collector.collect("phone");
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].platform(), Platform::Twitter);
        assert_eq!(items[3].platform(), Platform::YouTube);
    }

    #[test]
    fn test_failing_source_is_skipped() {
        let mut collector = ItemCollector::new();
        collector.add_source(Box::new(FailingSource));
        collector.add_source(Box::new(SampleSource::twitter()));

        let items = collector.collect("phone");
        assert_eq!(collector.source_count(), 2);
        assert!(!items.is_empty());
        assert!(items.iter().all(|i| i.platform() == Platform::Twitter));
    }

    #[test]
    fn test_empty_collector() {
        assert!(ItemCollector::new().collect("anything").is_empty());
    }

    #[test]
    fn test_json_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"platform": "twitter", "text": "a"}}, {{"platform": "youtube", "text": "b", "viewCount": 3}}]"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path());
        let items = source.fetch("ignored", 10).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].engagement(), 3);

        assert_eq!(source.fetch("ignored", 1).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let source = JsonFileSource::new("/definitely/not/here.json");
        assert!(matches!(source.fetch("q", 10), Err(SentimentError::Io(_))));
    }
}
