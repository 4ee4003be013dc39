//! # Report Aggregator
//!
//! Turns normalized records into a sentiment distribution, per-platform
//! engagement summaries, representative examples and frequent terms.

use crate::data::{Platform, TextNormalizer};
use crate::defaults;
use crate::pipeline::NormalizedRecord;
use crate::sentiment::Sentiment;
use crate::utils::ReportConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use tracing::info;

/// Counts per sentiment class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentDistribution {
    /// Count one record of the given class
    pub fn add(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    /// Count for a class
    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    /// Total records counted
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Fraction of records in a class, 0.0 when nothing was counted
    pub fn share(&self, sentiment: Sentiment) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.get(sentiment) as f64 / total as f64
        }
    }
}

impl FromIterator<Sentiment> for SentimentDistribution {
    fn from_iter<I: IntoIterator<Item = Sentiment>>(iter: I) -> Self {
        let mut distribution = Self::default();
        for sentiment in iter {
            distribution.add(sentiment);
        }
        distribution
    }
}

/// Per-platform totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformSummary {
    pub platform: Platform,
    /// Number of records from the platform
    pub items: usize,
    /// Sum of record engagement
    pub engagement: u64,
    pub distribution: SentimentDistribution,
}

/// How example texts are ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExampleRanking {
    /// Input order
    #[default]
    FirstSeen,
    /// Highest engagement first, input order on ties
    Engagement,
}

/// A representative text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub text: String,
    /// Platform, with the video title for YouTube comments
    pub label: String,
    pub engagement: u64,
}

/// Representative texts for the polar classes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopExamples {
    pub positive: Vec<Example>,
    pub negative: Vec<Example>,
}

impl TopExamples {
    /// Whether neither class has an example
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// A frequent term with its count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// Aggregated view of one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub distribution: SentimentDistribution,
    /// Only platforms present in the input, Twitter before YouTube
    pub platforms: Vec<PlatformSummary>,
    pub examples: TopExamples,
    pub positive_terms: Vec<TermCount>,
    pub negative_terms: Vec<TermCount>,
}

impl Report {
    /// Whether the report was built from no records
    pub fn is_empty(&self) -> bool {
        self.distribution.total() == 0
    }

    /// Summary for a platform, if present
    pub fn platform(&self, platform: Platform) -> Option<&PlatformSummary> {
        self.platforms.iter().find(|s| s.platform == platform)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sentiment Report ({} items)", self.distribution.total())?;
        if self.is_empty() {
            return writeln!(f, "  No data");
        }

        for sentiment in Sentiment::all() {
            writeln!(
                f,
                "  {:<9} {:>5} ({:>5.1}%)",
                sentiment.as_str(),
                self.distribution.get(sentiment),
                self.distribution.share(sentiment) * 100.0
            )?;
        }

        writeln!(f, "Platforms:")?;
        for summary in &self.platforms {
            writeln!(
                f,
                "  {:<9} items {:>5}  engagement {:>10}  (+{} ~{} -{})",
                summary.platform.name(),
                summary.items,
                summary.engagement,
                summary.distribution.positive,
                summary.distribution.neutral,
                summary.distribution.negative
            )?;
        }

        for (title, examples, terms) in [
            ("Pros", &self.examples.positive, &self.positive_terms),
            ("Cons", &self.examples.negative, &self.negative_terms),
        ] {
            writeln!(f, "{}:", title)?;
            if examples.is_empty() {
                writeln!(f, "  (none)")?;
            }
            for example in examples {
                writeln!(f, "  - {} [{}]", example.text.trim(), example.label)?;
            }
            if !terms.is_empty() {
                let joined: Vec<String> = terms
                    .iter()
                    .map(|t| format!("{} ({})", t.term, t.count))
                    .collect();
                writeln!(f, "  Top terms: {}", joined.join(", "))?;
            }
        }

        Ok(())
    }
}

/// Report aggregator
#[derive(Debug, Clone)]
pub struct ReportAggregator {
    max_examples: usize,
    min_example_chars: usize,
    max_terms: usize,
    ranking: ExampleRanking,
    normalizer: TextNormalizer,
}

impl Default for ReportAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportAggregator {
    /// Create an aggregator with default limits
    pub fn new() -> Self {
        Self {
            max_examples: defaults::MAX_EXAMPLES,
            min_example_chars: defaults::MIN_EXAMPLE_CHARS,
            max_terms: defaults::MAX_TERMS,
            ranking: ExampleRanking::default(),
            normalizer: TextNormalizer::new(),
        }
    }

    /// Create an aggregator from the report section of the configuration
    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new()
            .with_max_examples(config.max_examples)
            .with_min_example_chars(config.min_example_chars)
            .with_max_terms(config.max_terms)
            .with_ranking(config.ranking)
    }

    /// Set the maximum examples per polarity
    pub fn with_max_examples(mut self, max_examples: usize) -> Self {
        self.max_examples = max_examples;
        self
    }

    /// Set the length examples must exceed
    pub fn with_min_example_chars(mut self, min_example_chars: usize) -> Self {
        self.min_example_chars = min_example_chars;
        self
    }

    /// Set the maximum frequent terms per polarity
    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms;
        self
    }

    /// Set example ordering
    pub fn with_ranking(mut self, ranking: ExampleRanking) -> Self {
        self.ranking = ranking;
        self
    }

    /// Build the full report
    pub fn aggregate(&self, records: &[NormalizedRecord]) -> Report {
        let distribution = Self::distribution(records);
        let platforms = Self::platform_summaries(records);

        info!(
            "Aggregated {} records: +{} ~{} -{} across {} platforms",
            distribution.total(),
            distribution.positive,
            distribution.neutral,
            distribution.negative,
            platforms.len()
        );

        Report {
            generated_at: Utc::now(),
            distribution,
            platforms,
            examples: TopExamples {
                positive: self.top_examples(records, Sentiment::Positive),
                negative: self.top_examples(records, Sentiment::Negative),
            },
            positive_terms: self.top_terms(records, Sentiment::Positive),
            negative_terms: self.top_terms(records, Sentiment::Negative),
        }
    }

    /// Counts per class over all records
    pub fn distribution(records: &[NormalizedRecord]) -> SentimentDistribution {
        records.iter().map(|r| r.sentiment()).collect()
    }

    /// Engagement and counts grouped by platform
    pub fn platform_summaries(records: &[NormalizedRecord]) -> Vec<PlatformSummary> {
        let mut groups: BTreeMap<Platform, PlatformSummary> = BTreeMap::new();

        for record in records {
            let summary = groups
                .entry(record.source())
                .or_insert_with(|| PlatformSummary {
                    platform: record.source(),
                    items: 0,
                    engagement: 0,
                    distribution: SentimentDistribution::default(),
                });
            summary.items += 1;
            summary.engagement = summary.engagement.saturating_add(record.engagement());
            summary.distribution.add(record.sentiment());
        }

        groups.into_values().collect()
    }

    /// Distinct representative texts of one class
    pub fn top_examples(&self, records: &[NormalizedRecord], sentiment: Sentiment) -> Vec<Example> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut candidates: Vec<&NormalizedRecord> = records
            .iter()
            .filter(|r| r.sentiment() == sentiment)
            .filter(|r| r.text().trim().chars().count() > self.min_example_chars)
            .filter(|r| seen.insert(r.text()))
            .collect();

        if self.ranking == ExampleRanking::Engagement {
            // stable sort keeps input order on ties
            candidates.sort_by(|a, b| b.engagement().cmp(&a.engagement()));
        }

        candidates
            .into_iter()
            .take(self.max_examples)
            .map(|r| Example {
                text: r.text().to_string(),
                label: r.label(),
                engagement: r.engagement(),
            })
            .collect()
    }

    /// Most frequent content terms of one class
    pub fn top_terms(&self, records: &[NormalizedRecord], sentiment: Sentiment) -> Vec<TermCount> {
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new(); // count, first seen
        let mut order = 0;

        for record in records.iter().filter(|r| r.sentiment() == sentiment) {
            for term in self.normalizer.content_terms(record.cleaned_text()) {
                let entry = counts.entry(term).or_insert((0, order));
                entry.0 += 1;
                order += 1;
            }
        }

        let mut terms: Vec<(&str, usize, usize)> = counts
            .into_iter()
            .map(|(term, (count, first))| (term, count, first))
            .collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        terms
            .into_iter()
            .take(self.max_terms)
            .map(|(term, count, _)| TermCount {
                term: term.to_string(),
                count,
            })
            .collect()
    }
}
