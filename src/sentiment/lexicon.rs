//! # Seed Lexicons
//!
//! Small word lists for languages without a scoring model.

use super::classifier::Sentiment;
use unicode_normalization::UnicodeNormalization;

/// A lexicon word found in a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconMatch {
    /// Matched seed word
    pub word: String,
    /// Its polarity
    pub sentiment: Sentiment,
    /// Byte offset of the first occurrence in the text
    pub position: usize,
}

/// Seed-word sentiment lexicon
///
/// Maps characteristic words to Positive or Negative. Words are matched as
/// substrings of the normalized text, so inflected forms still hit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeedLexicon {
    /// Words with positive polarity, in insertion order
    positive: Vec<String>,
    /// Words with negative polarity, in insertion order
    negative: Vec<String>,
}

impl SeedLexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in Hindi seed words
    pub fn hindi() -> Self {
        Self::from_words(
            ["अच्छा", "खुश", "पसंद"],
            ["बुरा", "गुस्सा", "नफरत"],
        )
    }

    /// Built-in Tamil seed words
    pub fn tamil() -> Self {
        Self::from_words(
            ["நல்ல", "சந்தோஷம்", "அருமை"],
            ["கெட்ட", "கோபம்", "வெறுப்பு"],
        )
    }

    /// Build a lexicon from positive and negative word lists
    pub fn from_words<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let mut lexicon = Self::new();
        for word in positive {
            lexicon.add_word(word, Sentiment::Positive);
        }
        for word in negative {
            lexicon.add_word(word, Sentiment::Negative);
        }
        lexicon
    }

    /// Add a word to the lexicon
    ///
    /// Neutral words and empty strings are ignored: the lexicon only carries polarity.
    /// Words are stored in NFC, the form normalized text is compared in.
    pub fn add_word(&mut self, word: impl Into<String>, sentiment: Sentiment) {
        let word: String = word.into().trim().to_lowercase().nfc().collect();
        if word.is_empty() {
            return;
        }
        match sentiment {
            Sentiment::Positive => self.positive.push(word),
            Sentiment::Negative => self.negative.push(word),
            Sentiment::Neutral => {}
        }
    }

    /// Get polarity of an exact word
    pub fn get(&self, word: &str) -> Option<Sentiment> {
        self.entries()
            .find(|(w, _)| *w == word)
            .map(|(_, sentiment)| sentiment)
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    /// Whether the lexicon has no words
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries, positive words first
    pub fn entries(&self) -> impl Iterator<Item = (&str, Sentiment)> {
        self.positive
            .iter()
            .map(|w| (w.as_str(), Sentiment::Positive))
            .chain(self.negative.iter().map(|w| (w.as_str(), Sentiment::Negative)))
    }

    /// Every lexicon word occurring in the text, ordered by position
    ///
    /// Same-position matches put the longer word first, then lexicon order.
    pub fn matches(&self, text: &str) -> Vec<LexiconMatch> {
        let mut found: Vec<(usize, usize, LexiconMatch)> = self
            .entries()
            .enumerate()
            .filter_map(|(order, (word, sentiment))| {
                text.find(word).map(|position| {
                    (
                        order,
                        word.len(),
                        LexiconMatch {
                            word: word.to_string(),
                            sentiment,
                            position,
                        },
                    )
                })
            })
            .collect();

        found.sort_by(|a, b| {
            a.2.position
                .cmp(&b.2.position)
                .then(b.1.cmp(&a.1))
                .then(a.0.cmp(&b.0))
        });

        found.into_iter().map(|(_, _, m)| m).collect()
    }

    /// The deciding match: the one that starts earliest in the text
    pub fn first_match(&self, text: &str) -> Option<LexiconMatch> {
        self.matches(text).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lexicons() {
        let hindi = SeedLexicon::hindi();
        assert_eq!(hindi.len(), 6);
        assert_eq!(hindi.get("अच्छा"), Some(Sentiment::Positive));
        assert_eq!(hindi.get("बुरा"), Some(Sentiment::Negative));

        let tamil = SeedLexicon::tamil();
        assert_eq!(tamil.len(), 6);
        assert_eq!(tamil.get("அருமை"), Some(Sentiment::Positive));
        assert_eq!(tamil.get("கோபம்"), Some(Sentiment::Negative));
    }

    #[test]
    fn test_substring_match() {
        let hindi = SeedLexicon::hindi();
        let m = hindi.first_match("यह बहुत बुरा है").unwrap();
        assert_eq!(m.word, "बुरा");
        assert_eq!(m.sentiment, Sentiment::Negative);
        assert!(hindi.first_match("ठीक है").is_none());
    }

    #[test]
    fn test_earliest_match_wins() {
        let hindi = SeedLexicon::hindi();

        let m = hindi.first_match("बुरा नहीं, अच्छा है").unwrap();
        assert_eq!(m.sentiment, Sentiment::Negative);

        let m = hindi.first_match("अच्छा है पर बुरा भी").unwrap();
        assert_eq!(m.sentiment, Sentiment::Positive);

        assert_eq!(hindi.matches("अच्छा है पर बुरा भी").len(), 2);
    }

    #[test]
    fn test_longer_word_wins_at_same_position() {
        let lexicon = SeedLexicon::from_words(["good"], ["goodbye"]);
        let m = lexicon.first_match("goodbye forever").unwrap();
        assert_eq!(m.word, "goodbye");
        assert_eq!(m.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_add_word_ignores_neutral_and_empty() {
        let mut lexicon = SeedLexicon::new();
        lexicon.add_word("meh", Sentiment::Neutral);
        lexicon.add_word("   ", Sentiment::Positive);
        assert!(lexicon.is_empty());

        lexicon.add_word("Super", Sentiment::Positive);
        assert_eq!(lexicon.get("super"), Some(Sentiment::Positive));
    }

    #[test]
    fn test_decomposed_word_matches_composed_text() {
        // க + U+0BC6 + U+0BBE composes to கொ
        let lexicon = SeedLexicon::from_words(Vec::<String>::new(), ["க\u{0BC6}\u{0BBE}பம்"]);
        assert_eq!(lexicon.get("க\u{0BCA}பம்"), Some(Sentiment::Negative));

        let m = lexicon.first_match("மிகவும் க\u{0BCA}பம்").unwrap();
        assert_eq!(m.sentiment, Sentiment::Negative);
    }
}
