//! # Text Normalization
//!
//! Cleaning of social-media text before language detection and scoring.

use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Text normalizer for tweets and comments
///
/// Keeps ASCII letters and digits, whitespace, and the Devanagari
/// (U+0900..=U+097F) and Tamil (U+0B80..=U+0BFF) blocks; everything else,
/// including emoji and punctuation, is dropped.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    /// Regex for URL removal
    url_regex: Regex,
    /// Regex for mention removal
    mention_regex: Regex,
    /// Regex for hashtag removal
    hashtag_regex: Regex,
    /// Regex matching characters outside the three supported scripts
    foreign_regex: Regex,
    /// Regex for multiple whitespace
    whitespace_regex: Regex,
    /// Stop words skipped when counting terms
    stop_words: HashSet<String>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    /// Create a new text normalizer
    pub fn new() -> Self {
        let stop_words: HashSet<String> = vec![
            // English
            "a", "an", "the", "is", "are", "was", "were", "be", "been", "being",
            "have", "has", "had", "do", "does", "did", "will", "would", "could",
            "should", "may", "might", "must", "shall", "can", "to", "of", "in",
            "for", "on", "with", "at", "by", "from", "as", "into", "after",
            "then", "here", "there", "when", "where", "why", "how", "all",
            "so", "than", "too", "very", "just", "and", "but", "if", "or",
            "this", "that", "these", "those", "i", "me", "my", "we", "our",
            "you", "your", "he", "him", "his", "she", "her", "it", "its",
            "they", "them", "their", "what", "which", "who", "am", "im",
            // Hindi
            "है", "हैं", "यह", "वह", "और", "का", "की", "के", "में", "को", "से",
            "पर", "भी", "तो", "था", "थी", "बहुत",
            // Tamil
            "ஒரு", "இது", "அது", "மற்றும்", "என்று", "மிகவும்",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self {
            url_regex: Regex::new(r"https?://\S*|www\.\S*").unwrap(),
            mention_regex: Regex::new(r"@\w+").unwrap(),
            hashtag_regex: Regex::new(r"#\w+").unwrap(),
            foreign_regex: Regex::new(r"[^a-zA-Z0-9\s\x{0900}-\x{097F}\x{0B80}-\x{0BFF}]").unwrap(),
            whitespace_regex: Regex::new(r"\s+").unwrap(),
            stop_words,
        }
    }

    /// Normalize raw text
    ///
    /// Steps:
    /// 1. Convert to lowercase
    /// 2. Remove URLs, mentions and hashtags
    /// 3. Drop characters outside Latin letters/digits, Devanagari and Tamil
    /// 4. Collapse whitespace and trim
    /// 5. Unicode normalization (NFC)
    ///
    /// The result is a fixed point: normalizing it again returns it unchanged.
    pub fn normalize(&self, text: &str) -> String {
        let lowercase = text.to_lowercase();

        let no_urls = self.url_regex.replace_all(&lowercase, "");
        let no_mentions = self.mention_regex.replace_all(&no_urls, "");
        let no_hashtags = self.hashtag_regex.replace_all(&no_mentions, "");

        let kept = self.foreign_regex.replace_all(&no_hashtags, "");

        let collapsed = self.whitespace_regex.replace_all(&kept, " ");

        // NFC last: dropping a symbol can leave a decomposable vowel sign pair adjacent
        collapsed.trim().nfc().collect()
    }

    /// Tokenize normalized text into words
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace().collect()
    }

    /// Check if a token is a stop word
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Tokens worth counting: no stop words, no single characters
    pub fn content_terms<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.tokenize(text)
            .into_iter()
            .filter(|token| token.chars().count() > 1 && !self.is_stop_word(token))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_allowed_char(c: char) -> bool {
        c.is_ascii_lowercase()
            || c.is_ascii_digit()
            || c == ' '
            || ('\u{0900}'..='\u{097F}').contains(&c)
            || ('\u{0B80}'..='\u{0BFF}').contains(&c)
    }

    fn samples() -> Vec<&'static str> {
        vec![
            "",
            "   ",
            "I love this product!! https://x.co",
            "Check this out www.example.com/path great news!",
            "@trader123 says #Bitcoin is 🚀🚀 MOONING!!!",
            "यह बहुत बुरा है 😡 #fail",
            "இந்த படம் அருமை!! @friend",
            "Mixed: good फिल्म நல்ல\t\n\u{00A0}end",
            "ÉCOLE Straße naïve café",
            "\u{0BC6}!\u{0BBE}",
            "tabs\tand\nnewlines   everywhere",
            "http://only-a-url",
            "1234 5678 !!! ???",
        ]
    }

    #[test]
    fn test_normalize_basic() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("  Hello   World  "), "hello world");
        assert_eq!(normalizer.normalize(""), "");
    }

    #[test]
    fn test_remove_urls() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("I love this product!! https://x.co"),
            "i love this product"
        );
        assert_eq!(
            normalizer.normalize("see www.example.com/a?b=c now"),
            "see now"
        );
    }

    #[test]
    fn test_remove_mentions_and_hashtags() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("@trader123 thinks #crypto is great"),
            "thinks is great"
        );
    }

    #[test]
    fn test_keeps_devanagari_and_tamil() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("यह बहुत बुरा है!!"), "यह बहुत बुरा है");
        assert_eq!(normalizer.normalize("படம் அருமை 👍"), "படம் அருமை");
    }

    #[test]
    fn test_drops_emoji_and_accents() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("so good 😍😍"), "so good");
        assert_eq!(normalizer.normalize("café"), "caf");
    }

    #[test]
    fn test_idempotent() {
        let normalizer = TextNormalizer::new();
        for text in samples() {
            let once = normalizer.normalize(text);
            let twice = normalizer.normalize(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", text);
        }
    }

    #[test]
    fn test_output_alphabet() {
        let normalizer = TextNormalizer::new();
        for text in samples() {
            let clean = normalizer.normalize(text);
            assert!(
                clean.chars().all(is_allowed_char),
                "unexpected character in {:?}",
                clean
            );
            assert!(!clean.starts_with(' ') && !clean.ends_with(' '));
            assert!(!clean.contains("  "));
        }
    }

    #[test]
    fn test_content_terms() {
        let normalizer = TextNormalizer::new();
        let terms = normalizer.content_terms("the battery is a great battery x");
        assert_eq!(terms, vec!["battery", "great", "battery"]);
    }
}
