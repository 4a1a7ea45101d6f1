use indexmap::IndexMap;

use crate::vectorizer::term::TermFrequency;

/// Sorted unique terms of a token stream
pub fn extract_vocabulary<T>(tokens: &[T]) -> Vec<String>
where
    T: AsRef<str>,
{
    TermFrequency::from(tokens).sorted_terms()
}

/// Occurrence count of every vocabulary entry in `tokens`
///
/// Dense over the vocabulary: entries absent from the stream map to 0.
pub fn bag_of_words<T>(tokens: &[T], vocabulary: &[String]) -> IndexMap<String, u64>
where
    T: AsRef<str>,
{
    TermFrequency::from(tokens).counts_over(vocabulary)
}

/// Normalize a bag-of-words into term frequencies
///
/// Each count is divided by the sum of all counts; an all-zero bag yields 0.0
/// for every entry.
pub fn term_frequency(bow: &IndexMap<String, u64>) -> IndexMap<String, f64> {
    let total: u64 = bow.values().sum();
    bow.iter()
        .map(|(word, &count)| {
            let tf = if total == 0 { 0.0 } else { count as f64 / total as f64 };
            (word.clone(), tf)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn vocabulary_sorted_and_deduplicated() {
        let vocab = extract_vocabulary(&tokens("the quick brown fox the dog sleeps"));
        assert_eq!(vocab, vec!["brown", "dog", "fox", "quick", "sleeps", "the"]);
    }

    #[test]
    fn bag_sums_to_stream_length() {
        let stream = tokens("a b a c a b");
        let vocab = extract_vocabulary(&stream);
        let bow = bag_of_words(&stream, &vocab);
        assert_eq!(bow.values().sum::<u64>(), stream.len() as u64);
        assert_eq!(bow["a"], 3);
    }

    #[test]
    fn bag_is_dense_over_vocabulary() {
        let vocab = vec!["missing".to_string(), "x".to_string()];
        let bow = bag_of_words(&tokens("x x"), &vocab);
        assert_eq!(bow["missing"], 0);
        assert_eq!(bow["x"], 2);
    }

    #[test]
    fn term_frequency_sums_to_one() {
        let stream = tokens("the quick brown fox the dog sleeps");
        let bow = bag_of_words(&stream, &extract_vocabulary(&stream));
        let tf = term_frequency(&bow);
        let sum: f64 = tf.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((tf["the"] - 2.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn term_frequency_of_empty_bag_is_zero() {
        let vocab = vec!["a".to_string(), "b".to_string()];
        let bow = bag_of_words::<String>(&[], &vocab);
        let tf = term_frequency(&bow);
        assert!(tf.values().all(|&v| v == 0.0));
        assert_eq!(tf.len(), 2);
    }
}
