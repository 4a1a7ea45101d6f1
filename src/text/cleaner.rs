use std::sync::LazyLock;

use regex::Regex;

static HTML_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+").unwrap());
static DIGIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").unwrap());
/// everything except letters, numbers, `_`, whitespace and sentence delimiters
/// (combining marks are dropped, unlike `\w`)
static PUNCT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s.!?]").unwrap());
static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Strip markup, URLs, digits and punctuation from raw text
///
/// `.`, `!` and `?` survive so that sentence splitting for TF-IDF can run on
/// the cleaned text. Whitespace runs collapse to a single space and the result
/// is trimmed.
pub fn clean_text(text: &str) -> String {
    let text = HTML_TAG_REGEX.replace_all(text, "");
    let text = URL_REGEX.replace_all(&text, "");
    let text = DIGIT_REGEX.replace_all(&text, "");
    let text = PUNCT_REGEX.replace_all(&text, "");
    let text = WHITESPACE_REGEX.replace_all(&text, " ");
    text.trim().to_string()
}

#[inline]
pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}
