use std::collections::HashSet;

use ahash::RandomState;

/// Built-in English stopword list
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "that'll", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because",
    "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below",
    "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t",
    "can", "will", "just", "don", "don't", "should", "should've", "now", "d", "ll",
    "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't",
    "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
    "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn",
    "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Immutable default stopword set, shared read-only across requests
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String, RandomState>,
}

impl StopwordSet {
    /// The built-in English list
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOPWORDS)
    }

    pub fn from_words<T>(words: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut set = HashSet::with_capacity_and_hasher(words.len(), RandomState::new());
        set.extend(words.iter().map(|w| w.as_ref().to_string()));
        Self { words: set }
    }

    /// Consume and return a set with `extra` added
    pub fn extended<T>(mut self, extra: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        self.words.extend(extra.iter().map(|w| w.as_ref().to_string()));
        self
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drop stopwords from `tokens`
    ///
    /// The working set is this set plus `custom`, built per call so the shared
    /// default never changes. Membership is tested on the lowercase form of a
    /// token; kept tokens keep their original case. Custom entries are added
    /// as given.
    pub fn filter<T>(&self, tokens: &[T], custom: Option<&[String]>) -> Vec<String>
    where
        T: AsRef<str>,
    {
        let custom: HashSet<&str, RandomState> = custom
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect();
        tokens
            .iter()
            .map(AsRef::as_ref)
            .filter(|token| {
                let lower = token.to_lowercase();
                !self.contains(&lower) && !custom.contains(lower.as_str())
            })
            .map(str::to_string)
            .collect()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_list_is_complete() {
        assert_eq!(StopwordSet::english().len(), 179);
    }

    #[test]
    fn filters_default_stopwords() {
        let set = StopwordSet::english();
        let tokens = ["the", "quick", "fox", "is", "here"];
        assert_eq!(set.filter(&tokens, None), vec!["quick", "fox"]);
    }

    #[test]
    fn custom_words_are_unioned() {
        let set = StopwordSet::english();
        let custom = vec!["quick".to_string()];
        let tokens = ["the", "quick", "fox", "runs"];
        assert_eq!(set.filter(&tokens, Some(custom.as_slice())), vec!["fox", "runs"]);
        // the shared set is untouched
        assert!(!set.contains("quick"));
    }

    #[test]
    fn membership_is_case_insensitive_output_keeps_case() {
        let set = StopwordSet::english();
        let tokens = ["The", "Quick", "FOX"];
        assert_eq!(set.filter(&tokens, None), vec!["Quick", "FOX"]);
    }

    #[test]
    fn extended_adds_words() {
        let set = StopwordSet::english().extended(&["lorem"]);
        assert!(set.contains("lorem"));
        assert_eq!(set.len(), 180);
    }
}
