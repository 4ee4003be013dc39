//! # Data Module
//!
//! Source items, text normalization and item sources.

mod items;
mod preprocessing;
mod sources;

pub use items::{Item, Platform, TwitterItem, YouTubeItem};
pub use preprocessing::TextNormalizer;
pub use sources::{load_items, ItemCollector, ItemSource, JsonFileSource, SampleSource};
