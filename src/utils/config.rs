//! Configuration management
//!
//! TOML configuration for detection, classification, reporting and the
//! audit trail. Every section falls back to its defaults when omitted.

use crate::defaults;
use crate::error::{Result, SentimentError};
use crate::report::ExampleRanking;
use crate::sentiment::SeedLexicon;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Language detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Detector confidence below which text falls back to English
    pub min_confidence: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_confidence: defaults::MIN_DETECTION_CONFIDENCE,
        }
    }
}

/// English classifier thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub positive_threshold: f64,
    pub negative_threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            positive_threshold: defaults::POSITIVE_THRESHOLD,
            negative_threshold: defaults::NEGATIVE_THRESHOLD,
        }
    }
}

/// Seed word lists for one language
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconWords {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl LexiconWords {
    /// Build the lexicon these lists describe
    pub fn to_lexicon(&self) -> SeedLexicon {
        SeedLexicon::from_words(self.positive.iter().cloned(), self.negative.iter().cloned())
    }
}

/// Lexicon overrides; absent languages keep the built-in lists
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hindi: Option<LexiconWords>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tamil: Option<LexiconWords>,
}

/// Report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Maximum example texts per polarity
    pub max_examples: usize,
    /// Examples must be longer than this many characters
    pub min_example_chars: usize,
    pub ranking: ExampleRanking,
    /// Maximum frequent terms per polarity
    pub max_terms: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_examples: defaults::MAX_EXAMPLES,
            min_example_chars: defaults::MIN_EXAMPLE_CHARS,
            ranking: ExampleRanking::default(),
            max_terms: defaults::MAX_TERMS,
        }
    }
}

/// Audit trail configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: defaults::AUDIT_LOG_PATH.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub detection: DetectionConfig,
    pub classifier: ClassifierConfig,
    pub lexicons: LexiconsConfig,
    pub report: ReportConfig,
    pub audit: AuditConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file, falling back to default
    ///
    /// The load error, if any, is handed back so the caller can report it
    /// once logging is set up.
    pub fn load_with_fallback<P: AsRef<Path>>(path: P) -> (Self, Option<SentimentError>) {
        match Self::load(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load configuration from file or use default
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let (config, error) = Self::load_with_fallback(path);
        if let Some(e) = error {
            warn!("Using default configuration, {} not loaded: {}", path.display(), e);
        }
        config
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        let ClassifierConfig {
            positive_threshold,
            negative_threshold,
        } = self.classifier;

        if !(-1.0..=1.0).contains(&positive_threshold) || !(-1.0..=1.0).contains(&negative_threshold) {
            return Err(SentimentError::InvalidConfig(
                "classifier thresholds must lie in [-1, 1]".to_string(),
            ));
        }
        if negative_threshold >= positive_threshold {
            return Err(SentimentError::InvalidConfig(format!(
                "negative_threshold ({}) must be below positive_threshold ({})",
                negative_threshold, positive_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.detection.min_confidence) {
            return Err(SentimentError::InvalidConfig(
                "detection.min_confidence must lie in [0, 1]".to_string(),
            ));
        }
        if self.report.max_examples == 0 {
            return Err(SentimentError::InvalidConfig(
                "report.max_examples must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
