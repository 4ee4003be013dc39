//! # Report Module
//!
//! Aggregation of normalized records and the optional CSV audit trail.

mod aggregator;
mod audit;

pub use aggregator::{
    Example, ExampleRanking, PlatformSummary, Report, ReportAggregator, SentimentDistribution,
    TermCount, TopExamples,
};
pub use audit::{AuditLog, AuditRow};
