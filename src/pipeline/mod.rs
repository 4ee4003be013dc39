//! # Pipeline Module
//!
//! Turns raw items into normalized, classified records.

mod unifier;

pub use unifier::{NormalizedRecord, RecordUnifier, TextAnalysis};
