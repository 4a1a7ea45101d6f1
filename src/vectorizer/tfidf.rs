use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::vectorizer::term::TermFrequency;

static SENTENCE_BOUNDARY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

pub trait TFIDFEngine: Send + Sync {
    /// TF-IDF weight of every vocabulary entry
    /// # Arguments
    /// * `text` - lowercased, cleaned full text (sentence delimiters intact)
    /// * `tokens` - processing token stream the TF is taken over
    /// * `vocabulary` - sorted unique terms of `tokens`
    /// # Returns
    /// * `IndexMap<String, f64>` - weights in vocabulary order
    fn tfidf(text: &str, tokens: &[String], vocabulary: &[String]) -> IndexMap<String, f64>;
}

/// Sentence-level TF-IDF engine
/// Every sentence of the input text counts as one document.
///
/// `tf(w) = count(w) / |tokens|`, `idf(w) = ln(sentences / df(w))` where
/// `df(w)` is the number of sentences whose lowercase text contains `w` as a
/// substring. Partial-word matches count. A term with `df == 0` weighs 0.0.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceTFIDFEngine;

/// Split on runs of `.`, `!`, `?`; trimmed, empty sentences dropped
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY_REGEX
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

impl TFIDFEngine for SentenceTFIDFEngine {
    fn tfidf(text: &str, tokens: &[String], vocabulary: &[String]) -> IndexMap<String, f64> {
        let sentences: Vec<String> = split_sentences(text)
            .into_iter()
            .map(str::to_lowercase)
            .collect();
        if sentences.is_empty() {
            return vocabulary.iter().map(|word| (word.clone(), 0.0)).collect();
        }

        let doc_num = sentences.len() as f64;
        let freq = TermFrequency::from(tokens);
        vocabulary
            .iter()
            .map(|word| {
                let doc_freq = sentences
                    .iter()
                    .filter(|sentence| sentence.contains(word.as_str()))
                    .count();
                let weight = if doc_freq == 0 {
                    0.0
                } else {
                    freq.probability(word) * (doc_num / doc_freq as f64).ln()
                };
                (word.clone(), weight)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn sentence_split_drops_empty() {
        assert_eq!(split_sentences("a b. c!? d...  "), vec!["a b", "c", "d"]);
        assert!(split_sentences(" ... !").is_empty());
    }

    #[test]
    fn single_sentence_weights_are_zero() {
        let tokens = words("quick brown fox");
        let vocab = words("brown fox quick");
        let tfidf = SentenceTFIDFEngine::tfidf("the quick brown fox", &tokens, &vocab);
        assert!(tfidf.values().all(|&v| v == 0.0));
        assert_eq!(tfidf.len(), 3);
    }

    #[test]
    fn no_sentences_weights_are_zero() {
        let vocab = words("x");
        let tfidf = SentenceTFIDFEngine::tfidf("...", &words("x"), &vocab);
        assert_eq!(tfidf["x"], 0.0);
    }

    #[test]
    fn weights_use_sentence_document_frequency() {
        let text = "the quick brown fox. the dog sleeps.";
        let tokens = words("quick brown fox dog sleeps");
        let vocab = words("brown dog fox quick sleeps");
        let tfidf = SentenceTFIDFEngine::tfidf(text, &tokens, &vocab);
        let expected = (1.0 / 5.0) * (2.0f64 / 1.0).ln();
        assert!((tfidf["fox"] - expected).abs() < 1e-12);
        assert!((tfidf["dog"] - expected).abs() < 1e-12);
    }

    #[test]
    fn substring_matches_count_as_occurrence() {
        // "cat" is found inside "catalog", so it appears in both sentences
        let text = "the catalog is open. a cat sleeps. birds sing";
        let tokens = words("cat birds");
        let vocab = words("birds cat");
        let tfidf = SentenceTFIDFEngine::tfidf(text, &tokens, &vocab);
        let expected_cat = 0.5 * (3.0f64 / 2.0).ln();
        let expected_birds = 0.5 * 3.0f64.ln();
        assert!((tfidf["cat"] - expected_cat).abs() < 1e-12);
        assert!((tfidf["birds"] - expected_birds).abs() < 1e-12);
    }

    #[test]
    fn absent_term_weighs_zero() {
        let text = "geese fly. dogs bark.";
        let tokens = words("goose fly dog bark");
        let vocab = words("bark dog fly goose");
        let tfidf = SentenceTFIDFEngine::tfidf(text, &tokens, &vocab);
        assert_eq!(tfidf["goose"], 0.0);
        assert!(tfidf["dog"] > 0.0);
    }
}
