//! # Platform Report Example
//!
//! Collects the built-in sample feed, unifies it and prints the
//! distribution, per-platform engagement and the top examples by impact.

use social_sentiment::{ExampleRanking, ItemCollector, RecordUnifier, ReportAggregator};

fn main() {
    println!("=== Platform Sentiment Report ===\n");

    let items = ItemCollector::with_samples().with_limit(50).collect("phone");
    println!("Collected {} items\n", items.len());

    let records = RecordUnifier::new().unify(&items);

    println!("--- First seen ---\n");
    let report = ReportAggregator::new().aggregate(&records);
    println!("{}", report);

    println!("--- By impact ---\n");
    let by_impact = ReportAggregator::new()
        .with_ranking(ExampleRanking::Engagement)
        .with_max_examples(3)
        .aggregate(&records);

    for example in &by_impact.examples.positive {
        println!("  + [{:>7}] {} ({})", example.engagement, example.text, example.label);
    }
    for example in &by_impact.examples.negative {
        println!("  - [{:>7}] {} ({})", example.engagement, example.text, example.label);
    }

    match serde_json::to_string_pretty(&by_impact.platforms) {
        Ok(json) => println!("\nPlatforms as JSON:\n{}", json),
        Err(e) => eprintln!("Failed to serialize platforms: {}", e),
    }
}
