//! # Language Detection
//!
//! Classifies normalized text as English, Hindi or Tamil. Detection never
//! fails outward: anything undecidable falls back to English.

use crate::defaults;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use whatlang::{Detector, Lang};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    English,
    Hindi,
    Tamil,
}

impl Language {
    /// All supported languages
    pub fn all() -> [Language; 3] {
        [Language::English, Language::Hindi, Language::Tamil]
    }

    /// ISO 639-1 code
    pub fn iso_code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Tamil => "ta",
        }
    }

    /// Parse an ISO 639-1 or 639-3 code
    pub fn from_iso_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "eng" => Some(Language::English),
            "hi" | "hin" => Some(Language::Hindi),
            "ta" | "tam" => Some(Language::Tamil),
            _ => None,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Tamil => "Tamil",
        }
    }

    fn to_whatlang(self) -> Lang {
        match self {
            Language::English => Lang::Eng,
            Language::Hindi => Lang::Hin,
            Language::Tamil => Lang::Tam,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why detection fell back to the default language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FallbackReason {
    /// No script or language could be determined (empty, digits only, ...)
    Undetermined,
    /// A supported language was found but below the confidence floor
    LowConfidence { candidate: Language, confidence: f64 },
    /// The model answered with a language outside the supported set
    Unsupported { code: String },
}

/// Outcome of language detection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Detection {
    /// Confidently detected language
    Detected { language: Language, confidence: f64 },
    /// Default branch; resolves to English
    Fallback { reason: FallbackReason },
}

impl Detection {
    /// Language to use downstream
    pub fn language(&self) -> Language {
        match self {
            Detection::Detected { language, .. } => *language,
            Detection::Fallback { .. } => Language::English,
        }
    }

    /// Whether the default branch was taken
    pub fn is_fallback(&self) -> bool {
        matches!(self, Detection::Fallback { .. })
    }
}

/// Language detector restricted to the supported languages
///
/// Backed by whatlang's script and trigram model, which is deterministic.
pub struct LanguageDetector {
    detector: Detector,
    min_confidence: f64,
}

impl fmt::Debug for LanguageDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageDetector")
            .field("languages", &Language::all())
            .field("min_confidence", &self.min_confidence)
            .finish()
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector {
    /// Create a detector for English, Hindi and Tamil
    pub fn new() -> Self {
        let allowlist = Language::all().iter().map(|l| l.to_whatlang()).collect();

        Self {
            detector: Detector::with_allowlist(allowlist),
            min_confidence: defaults::MIN_DETECTION_CONFIDENCE,
        }
    }

    /// Set the confidence floor below which English is assumed
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence.clamp(0.0, 1.0);
        self
    }

    /// Confidence floor in use
    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// Detect the language of normalized text
    pub fn detect(&self, cleaned: &str) -> Detection {
        let info = match self.detector.detect(cleaned) {
            Some(info) => info,
            None => {
                debug!("Language undetermined for {:?}", cleaned);
                return Detection::Fallback {
                    reason: FallbackReason::Undetermined,
                };
            }
        };

        let code = info.lang().code();
        let language = match Language::from_iso_code(code) {
            Some(language) => language,
            None => {
                debug!("Unsupported language {} detected", code);
                return Detection::Fallback {
                    reason: FallbackReason::Unsupported {
                        code: code.to_string(),
                    },
                };
            }
        };

        let confidence = info.confidence();
        if confidence < self.min_confidence {
            debug!(
                "Low confidence {:.2} for {}, falling back to English",
                confidence, language
            );
            return Detection::Fallback {
                reason: FallbackReason::LowConfidence {
                    candidate: language,
                    confidence,
                },
            };
        }

        Detection::Detected {
            language,
            confidence,
        }
    }

    /// Detect the language, resolving fallbacks to English
    pub fn detect_language(&self, cleaned: &str) -> Language {
        self.detect(cleaned).language()
    }
}
