//! Utility modules

mod config;

pub use config::{
    AuditConfig, ClassifierConfig, Config, DetectionConfig, LexiconWords, LexiconsConfig,
    LoggingConfig, ReportConfig,
};
