use std::sync::LazyLock;

use regex::Regex;

static NON_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").unwrap());

/// Split text into word tokens
///
/// All remaining punctuation (sentence delimiters included) is dropped before
/// splitting on whitespace. Input order and duplicates are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    NON_WORD_REGEX
        .replace_all(text, "")
        .split_whitespace()
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_strips_delimiters() {
        assert_eq!(
            tokenize("the quick brown fox. the dog sleeps!"),
            vec!["the", "quick", "brown", "fox", "the", "dog", "sleeps"]
        );
    }

    #[test]
    fn keeps_case_and_duplicates() {
        assert_eq!(tokenize("Dogs run run"), vec!["Dogs", "run", "run"]);
    }

    #[test]
    fn punctuation_only_fragments_vanish() {
        assert!(tokenize(" ... !!! ?").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn combining_marks_are_stripped() {
        assert_eq!(tokenize("a\u{301}bc\u{301}s snake_case"), vec!["abcs", "snake_case"]);
    }

    #[test]
    fn inner_punctuation_joins_word() {
        assert_eq!(tokenize("don't stop"), vec!["dont", "stop"]);
    }
}
