//! # Single Text Analysis Example
//!
//! Runs a handful of English, Hindi and Tamil texts through
//! normalization, language detection and classification.

use social_sentiment::{
    Language, LanguageDetector, RecordUnifier, SeedLexicon, SentimentClassifier, TextNormalizer,
};

fn main() {
    println!("=== Multilingual Sentiment Demo ===\n");

    let unifier = RecordUnifier::new();

    let texts = vec![
        "I love this product!! https://x.co",
        "Worst customer service ever @support #fail",
        "The box arrived on Tuesday.",
        "यह बहुत बुरा है",
        "मुझे यह फ़ोन पसंद है 😍",
        "ठीक है",
        "இந்த படம் அருமை",
        "ஃபோன் கெட்ட தரம், கோபம் வருது",
    ];

    println!("{}", "=".repeat(70));
    for text in texts {
        let analysis = unifier.analyze_text(text);

        println!("\nText: \"{}\"", text);
        println!("{}", "-".repeat(60));
        println!("  Cleaned:   \"{}\"", analysis.cleaned_text);
        println!("  Language:  {}", analysis.language());
        println!("  Sentiment: {}", analysis.sentiment());
        println!("  Verdict:   {:?}", analysis.verdict);
    }
    println!("\n{}", "=".repeat(70));

    // Swap the Hindi lexicon for a custom one
    println!("\n=== Custom Lexicon Demo ===\n");

    let classifier = SentimentClassifier::new()
        .with_lexicon(Language::Hindi, SeedLexicon::from_words(["शानदार"], ["बेकार"]));
    let custom = RecordUnifier::with_components(
        TextNormalizer::new(),
        LanguageDetector::new(),
        classifier,
    );

    for text in ["फोन शानदार है", "बैटरी बेकार है", "कैमरा अच्छा है"] {
        let analysis = custom.analyze_text(text);
        println!("  {:20} -> {}", text, analysis.sentiment());
    }
}
